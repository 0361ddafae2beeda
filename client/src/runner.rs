use std::sync::Arc;

use common::games::tictactoe::{GameStatus, TicTacToeSession};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::terminal::{Command, help_text, parse_command, render_state};

pub async fn run_terminal_game(
    session: TicTacToeSession,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = Arc::new(session);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("{}", render_state(&session.snapshot().await));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Err(e) = apply_command(&session, command).await {
                            println!("{}", e);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log!("[session:{}] interrupted", session.session_id());
                break;
            }
        }
    }

    session.shutdown().await;
    Ok(())
}

async fn apply_command(session: &Arc<TicTacToeSession>, command: Command) -> Result<(), String> {
    match command {
        Command::SelectDifficulty(difficulty) => {
            session.set_difficulty(difficulty).await?;
            print!("{}", render_state(&session.snapshot().await));
        }
        Command::Start => {
            session.start().await?;
            print!("{}", render_state(&session.snapshot().await));
        }
        Command::Place(index) => {
            session.handle_player_move(index).await?;
            let state = session.snapshot().await;
            print!("{}", render_state(&state));

            if state.is_computer_thinking {
                let session = Arc::clone(session);
                tokio::spawn(async move {
                    let state = session.wait_for_turn().await;
                    if state.status != GameStatus::PreGame {
                        print!("{}", render_state(&state));
                    }
                });
            }
        }
        Command::Reset => {
            session.reset().await;
            print!("{}", render_state(&session.snapshot().await));
        }
        Command::Help => {
            println!("{}", help_text(session.snapshot().await.status));
        }
        Command::Quit => {}
    }
    Ok(())
}
