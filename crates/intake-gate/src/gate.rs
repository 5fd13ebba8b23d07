//! Acceptance gate
//!
//! A blocking modal with two independent acknowledgements. "Accept" only
//! fires with both checked; "decline" navigates away without touching the
//! state. Background clicks and the escape key do nothing.

use crate::error::GateError;
use crate::state_machine::{validate_transition, GateState};
use serde::{Deserialize, Serialize};

/// Default route for a declined gate
pub const DEFAULT_DECLINE_ROUTE: &str = "/";

/// Gate settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Where "decline" navigates
    pub decline_route: String,
    /// Whether the flow is blocked until acceptance
    pub required: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            decline_route: DEFAULT_DECLINE_ROUTE.to_string(),
            required: true,
        }
    }
}

impl GateConfig {
    /// Create default config
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With decline route
    #[must_use]
    pub fn with_decline_route(mut self, route: impl Into<String>) -> Self {
        self.decline_route = route.into();
        self
    }

    /// With required flag
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// One of the two confirmations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acknowledgement {
    First,
    Second,
}

/// User action on the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateEvent {
    Toggle(Acknowledgement),
    Accept,
    Decline,
    DimmerClick,
    EscapeKey,
}

/// What the shell should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEffect {
    /// Nothing
    None,
    /// Close the modal and continue the flow
    Accepted,
    /// Leave the flow
    NavigateAway {
        route: String,
    },
}

/// Terms acceptance state machine
#[derive(Debug, Clone)]
pub struct AcceptanceGate {
    config: GateConfig,
    state: GateState,
    first: bool,
    second: bool,
}

impl AcceptanceGate {
    /// Create pending gate with both acknowledgements unchecked
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            state: GateState::Pending,
            first: false,
            second: false,
        }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Check if the terms were accepted
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.state == GateState::Accepted
    }

    /// Check if the flow is still blocked
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> bool {
        self.config.required && !self.is_accepted()
    }

    /// Acknowledgement flag
    #[inline]
    #[must_use]
    pub fn is_checked(&self, ack: Acknowledgement) -> bool {
        match ack {
            Acknowledgement::First => self.first,
            Acknowledgement::Second => self.second,
        }
    }

    /// Check if "accept" is enabled
    #[inline]
    #[must_use]
    pub fn can_accept(&self) -> bool {
        self.state == GateState::Pending && self.first && self.second
    }

    /// Flip one acknowledgement and return its new value
    ///
    /// Ignored once accepted.
    pub fn toggle(&mut self, ack: Acknowledgement) -> bool {
        if self.is_accepted() {
            return self.is_checked(ack);
        }
        let flag = match ack {
            Acknowledgement::First => &mut self.first,
            Acknowledgement::Second => &mut self.second,
        };
        *flag = !*flag;
        tracing::trace!("Acknowledgement {:?} set to {}", ack, *flag);
        *flag
    }

    /// Accept the terms
    ///
    /// # Errors
    /// - [`GateError::IllegalTransition`] if already accepted
    /// - [`GateError::NotAcknowledged`] unless both flags are checked
    pub fn accept(&mut self) -> Result<GateEffect, GateError> {
        validate_transition(self.state, GateState::Accepted)?;
        if !(self.first && self.second) {
            return Err(GateError::NotAcknowledged {
                first: self.first,
                second: self.second,
            });
        }
        self.state = GateState::Accepted;
        tracing::info!("Terms accepted");
        Ok(GateEffect::Accepted)
    }

    /// Decline the terms and leave the flow
    ///
    /// The gate stays pending.
    ///
    /// # Errors
    /// [`GateError::AlreadyAccepted`] once accepted
    pub fn decline(&mut self) -> Result<GateEffect, GateError> {
        if self.is_accepted() {
            return Err(GateError::AlreadyAccepted);
        }
        tracing::info!("Terms declined, navigating to {}", self.config.decline_route);
        Ok(GateEffect::NavigateAway {
            route: self.config.decline_route.clone(),
        })
    }

    /// Dispatch a user action
    ///
    /// # Errors
    /// Same as [`accept`](Self::accept) and [`decline`](Self::decline)
    pub fn handle(&mut self, event: GateEvent) -> Result<GateEffect, GateError> {
        match event {
            GateEvent::Toggle(ack) => {
                self.toggle(ack);
                Ok(GateEffect::None)
            }
            GateEvent::Accept => self.accept(),
            GateEvent::Decline => self.decline(),
            GateEvent::DimmerClick | GateEvent::EscapeKey => {
                tracing::trace!("Ignored {:?}; gate is not dismissable", event);
                Ok(GateEffect::None)
            }
        }
    }
}

impl Default for AcceptanceGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}
