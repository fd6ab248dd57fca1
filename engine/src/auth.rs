//! # AuthFlow — the phone-verification session state machine
//!
//! Owns the login/signup → phone-entry → verify progression, the pending E.164
//! number, and the resend cooldown. The flow is created by the auth gate when
//! no identity exists and dropped as soon as a code verifies; "authenticated"
//! is therefore not a state here but the `Ok` result of
//! [`AuthFlow::submit_code`], on which the caller tears the flow down.
//!
//! All mutation goes through the methods below; state sits behind a `RefCell`
//! that is never held across an await, so overlapping async calls from the UI
//! interleave safely on the single-threaded scheduler.

use std::cell::RefCell;

use thiserror::Error;

use api::{Gateway, GatewayError};

use crate::phone::{Country, PhoneError};

/// Seconds a fresh code dispatch blocks the resend action.
pub const RESEND_COOLDOWN_SECS: u8 = 59;

/// Which of the two entry screens opened the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseMode {
    Login,
    Signup,
}

/// Current screen/step of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
    PhoneEntry,
    Verify,
}

/// Social providers offered on the base screen. Dispatch is stubbed: the
/// backend exposes no social identity operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Facebook,
    Google,
    Apple,
}

impl SocialProvider {
    pub fn label(&self) -> &'static str {
        match self {
            SocialProvider::Facebook => "Facebook",
            SocialProvider::Google => "Google",
            SocialProvider::Apple => "Apple",
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Phone(#[from] PhoneError),

    #[error("verification code must be 6 digits")]
    InvalidCode,

    /// An operation was invoked from a step it does not belong to.
    #[error("action not available in this step")]
    WrongMode,

    #[error("{0} sign-in is not available")]
    SocialUnavailable(&'static str),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

struct SessionState {
    base: BaseMode,
    mode: AuthMode,
    /// E.164 number a code was dispatched to; empty until phone entry submits.
    pending_phone: String,
    cooldown: u8,
}

pub struct AuthFlow<G> {
    gateway: G,
    state: RefCell<SessionState>,
}

impl<G: Gateway> AuthFlow<G> {
    pub fn new(gateway: G, base: BaseMode) -> Self {
        let mode = match base {
            BaseMode::Login => AuthMode::Login,
            BaseMode::Signup => AuthMode::Signup,
        };
        Self {
            gateway,
            state: RefCell::new(SessionState {
                base,
                mode,
                pending_phone: String::new(),
                cooldown: 0,
            }),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.state.borrow().mode
    }

    pub fn pending_phone(&self) -> String {
        self.state.borrow().pending_phone.clone()
    }

    pub fn cooldown(&self) -> u8 {
        self.state.borrow().cooldown
    }

    /// Whether the resend action is currently live.
    pub fn can_resend(&self) -> bool {
        let state = self.state.borrow();
        state.mode == AuthMode::Verify && state.cooldown == 0
    }

    /// Base screen → phone entry. Ignored elsewhere.
    pub fn choose_phone(&self) {
        let mut state = self.state.borrow_mut();
        if matches!(state.mode, AuthMode::Login | AuthMode::Signup) {
            state.mode = AuthMode::PhoneEntry;
        }
    }

    /// One step back: verify → phone entry, phone entry → the original base
    /// screen (dropping the stored number).
    pub fn back(&self) {
        let mut state = self.state.borrow_mut();
        match state.mode {
            AuthMode::Verify => state.mode = AuthMode::PhoneEntry,
            AuthMode::PhoneEntry => {
                state.pending_phone.clear();
                state.mode = match state.base {
                    BaseMode::Login => AuthMode::Login,
                    BaseMode::Signup => AuthMode::Signup,
                };
            }
            AuthMode::Login | AuthMode::Signup => {}
        }
    }

    /// One cooldown decrement; returns the remaining seconds. The per-second
    /// driver loop lives with the verify screen so its teardown stops the tick.
    pub fn tick(&self) -> u8 {
        let mut state = self.state.borrow_mut();
        state.cooldown = state.cooldown.saturating_sub(1);
        state.cooldown
    }

    /// Compose and validate the number, then dispatch a one-time code.
    ///
    /// Invalid input fails before any gateway call and changes nothing; a
    /// gateway failure also leaves the flow in phone entry so resubmitting
    /// retries cleanly. On success the flow enters verify with a fresh
    /// cooldown.
    pub async fn submit_phone(&self, country: &Country, input: &str) -> Result<(), AuthError> {
        if self.state.borrow().mode != AuthMode::PhoneEntry {
            return Err(AuthError::WrongMode);
        }
        let e164 = country.format_e164(input)?;

        self.gateway.request_phone_code(&e164).await?;

        let mut state = self.state.borrow_mut();
        state.pending_phone = e164;
        state.mode = AuthMode::Verify;
        state.cooldown = RESEND_COOLDOWN_SECS;
        Ok(())
    }

    /// Submit the received code. `Ok(())` means the identity is confirmed and
    /// the flow is finished; any error leaves the verify step untouched.
    pub async fn submit_code(&self, code: &str) -> Result<(), AuthError> {
        if self.state.borrow().mode != AuthMode::Verify {
            return Err(AuthError::WrongMode);
        }
        let code = code.trim();
        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AuthError::InvalidCode);
        }
        let phone = self.pending_phone();
        self.gateway.verify_phone_code(&phone, code).await?;
        Ok(())
    }

    /// Re-dispatch the code to the pending number. A no-op while the cooldown
    /// runs; on successful dispatch the cooldown restarts at 59.
    pub async fn resend(&self) -> Result<(), AuthError> {
        if !self.can_resend() {
            return Ok(());
        }
        let phone = self.pending_phone();
        self.gateway.request_phone_code(&phone).await?;
        self.state.borrow_mut().cooldown = RESEND_COOLDOWN_SECS;
        Ok(())
    }

    /// Social dispatch is stubbed; the screen surfaces this like any other
    /// error.
    pub async fn social_sign_in(&self, provider: SocialProvider) -> Result<(), AuthError> {
        tracing::warn!(provider = provider.label(), "social sign-in not configured");
        Err(AuthError::SocialUnavailable(provider.label()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
