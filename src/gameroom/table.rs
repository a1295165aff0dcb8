use super::*;
use crate::gameplay::*;

/// Runs a game loop between a [`Thrower`] and a [`Judge`].
///
/// The table owns the session. Each iteration asks the judge for a call,
/// scores it, broadcasts the verdict, then asks the judge to dismiss it
/// before dealing the next round. The loop ends when the judge leaves or,
/// if a limit was set, once that many games have been finished.
#[derive(Debug)]
pub struct Table<T, J> {
    thrower: T,
    judge: J,
    games: Option<usize>,
}

impl<T, J> Table<T, J>
where
    T: Thrower,
    J: Judge,
{
    pub fn new(thrower: T, judge: J) -> Self {
        Self {
            thrower,
            judge,
            games: None,
        }
    }
    /// Leave after `n` finished games.
    pub fn limit(mut self, n: usize) -> Self {
        self.games = Some(n);
        self
    }

    pub fn play(self) -> anyhow::Result<Summary> {
        let Self {
            thrower,
            mut judge,
            games,
        } = self;
        let mut summary = Summary::default();
        if games == Some(0) {
            return Ok(summary);
        }
        let mut session = Session::start(thrower);
        judge.notify(&Event::Deal(*session.state().round()));
        loop {
            let Some(said_yes) = judge.decide(session.state())? else {
                log::info!("judge left the table");
                break;
            };
            let complete = session.submit(said_yes);
            summary.witness(&complete.judgment());
            judge.notify(&Event::Verdict(complete.judgment()));
            let over = complete.is_over();
            if over {
                summary.finish(complete.state().score());
                judge.notify(&Event::GameOver(complete.state().score()));
                if games.is_some_and(|n| summary.games() >= n) {
                    break;
                }
            }
            if !judge.proceed(complete.state())? {
                log::info!("judge left the table");
                break;
            }
            session = complete.advance();
            if over {
                judge.notify(&Event::Reset);
            }
            judge.notify(&Event::Deal(*session.state().round()));
        }
        Ok(summary)
    }
}
