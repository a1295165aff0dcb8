use crate::gameplay::*;
use crate::gameroom::*;
use anyhow::Context;
use colored::Colorize;
use dialoguer::Select;

/// Interactive judge reading calls from the terminal.
/// Esc or `q` at any prompt leaves the table.
#[derive(Debug, Default)]
pub struct Human;

impl Judge for Human {
    fn decide(&mut self, state: &State) -> anyhow::Result<Option<bool>> {
        println!("{}", Self::screen(state));
        let choice = Self::selection(Self::QUESTION, &["Yes".green(), "No".red()])?;
        Ok(choice.map(|i| i == 0))
    }
    fn proceed(&mut self, state: &State) -> anyhow::Result<bool> {
        let title = state
            .verdict()
            .map(|judgment| judgment.to_string())
            .unwrap_or_default();
        let (next, farewell) = Self::alert(state);
        if let Some(farewell) = farewell {
            println!("{}", farewell);
        }
        let choice = Self::selection(&title, &[next.normal(), "Quit".dimmed()])?;
        Ok(choice == Some(0))
    }
    fn notify(&mut self, event: &Event) {
        if let Event::Reset = event {
            println!("\n{}", "New game".bold());
        }
    }
}

impl Human {
    const QUESTION: &'static str = "Does our player win?";

    fn screen(state: &State) -> String {
        format!(
            "\n{}\n{}\n\n  {:<12} {}\n  {:^12}\n  {:<12} {}\n",
            "Rock Paper Scissors".bold(),
            format!("Round {} of {}", state.played(), state.total()).dimmed(),
            Self::sign(state.computer()),
            "Computer",
            "Vs".red().bold(),
            Self::sign(state.player()),
            "Player",
        )
    }
    /// Button label for dismissing the verdict, and the closing message
    /// once the final round has been judged.
    fn alert(state: &State) -> (&'static str, Option<String>) {
        match state.is_over() {
            true => (
                "Restart",
                Some(format!(
                    "Well done, that's the end of the game.  You scored {}!",
                    state.score()
                )),
            ),
            false => ("Next Round", None),
        }
    }
    fn sign(sign: Sign) -> String {
        format!("{} {}", sign.glyph(), sign)
    }
    fn selection<T>(prompt: &str, items: &[T]) -> anyhow::Result<Option<usize>>
    where
        T: ToString,
    {
        Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(items)
            .default(0)
            .interact_opt()
            .context("reading choice from terminal")
    }
}
