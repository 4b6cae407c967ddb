//! Auth service - the simulated step-up sign-in pipeline
//!
//! Mirrors the product flow: credentials, then a one-time code, then a
//! biometric check, then the store sign-in. None of the steps consult a
//! real authority; the injected verifier decides what passes.

use crate::domain::result::Result;
use crate::ports::StepUpVerifier;
use crate::store::BankingStore;

pub struct AuthService {
    verifier: Box<dyn StepUpVerifier>,
}

impl AuthService {
    pub fn new(verifier: Box<dyn StepUpVerifier>) -> Self {
        Self { verifier }
    }

    /// First gate: both credentials must be present before a code is issued
    pub fn credentials_present(&self, email: &str, password: &str) -> bool {
        !email.is_empty() && !password.is_empty()
    }

    /// Check a one-time code against the verifier
    pub fn verify_otp(&self, code: &str) -> bool {
        self.verifier.verify_otp(code)
    }

    /// Run the simulated biometric step
    pub fn verify_biometric(&self) -> bool {
        self.verifier.verify_biometric()
    }

    /// Final step: sign in through the store
    pub fn complete_login(
        &self,
        store: &mut BankingStore,
        email: &str,
        password: &str,
    ) -> Result<bool> {
        store.login(email, password)
    }
}
