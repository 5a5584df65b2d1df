use crate::{
    config::Config,
    error::Result,
    rules::{MatchContext, Verdict, outside_fielders, validate_with_radius},
    state::FieldState,
    types::{Handedness, MatchFormat},
};
use log::info;

/// Everything one user works on: the field, the match situation and the
/// dimensions it is judged against. Sessions never share state.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    state: FieldState,
    context: MatchContext,
}

impl Session {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let state = FieldState::with_field(
            config.session.handedness,
            config.field.field_radius,
            config.session.import_policy,
        );
        let context = MatchContext::new(config.session.format.clone(), 0);
        info!(
            "Session started: {} batsman, {} format",
            state.handedness(),
            context.format
        );
        Ok(Self {
            config,
            state,
            context,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Mutable access for add/remove/reset/import transitions
    pub fn state_mut(&mut self) -> &mut FieldState {
        &mut self.state
    }

    pub fn context(&self) -> &MatchContext {
        &self.context
    }

    /// Bring stored coordinates in line with the selected batsman before anything reads them
    pub fn sync_handedness(&mut self, handedness: Handedness) -> bool {
        self.state.on_handedness_changed(handedness)
    }

    pub fn set_match(&mut self, format: MatchFormat, overs_completed: u32) {
        self.context = MatchContext::new(format, overs_completed);
    }

    /// Recomputed from the current state on every call
    pub fn verdict(&self) -> Verdict {
        validate_with_radius(
            self.state.positions(),
            &self.context,
            self.config.field.inner_radius,
        )
    }

    pub fn outside_fielders(&self) -> Vec<&str> {
        outside_fielders(self.state.positions(), self.config.field.inner_radius)
    }
}
