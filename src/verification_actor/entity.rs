//! [`ActorEntity`] implementation for [`VerificationCode`].

use super::actions::{CheckOutcome, VerificationAction};
use super::error::VerificationError;
use super::VerificationContext;
use crate::framework::ActorEntity;
use crate::model::{Phone, VerificationCode, VerificationIssue};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for VerificationCode {
    type Id = Phone;
    type Create = VerificationIssue;
    type Update = Infallible;
    type Action = VerificationAction;
    type ActionResult = CheckOutcome;
    type Context = VerificationContext;
    type Error = VerificationError;

    fn assign_id(_seq: u32, params: &VerificationIssue) -> Phone {
        params.phone.clone()
    }

    async fn from_create_params(
        phone: Phone,
        params: VerificationIssue,
        _ctx: &VerificationContext,
    ) -> Result<Self, VerificationError> {
        Ok(Self {
            phone,
            code: params.code,
            issued_at: params.issued_at,
            attempts: 0,
            consumed: false,
        })
    }

    fn is_retired(&self) -> bool {
        self.consumed
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &VerificationContext,
    ) -> Result<(), VerificationError> {
        match update {}
    }

    /// # Check
    /// - expired (when a TTL is configured): consumed, [`CheckOutcome::Expired`]
    /// - match: consumed, [`CheckOutcome::Accepted`]
    /// - mismatch: one attempt used; the attempt that reaches the limit consumes the
    ///   code and yields [`CheckOutcome::Exhausted`]
    async fn handle_action(
        &mut self,
        action: VerificationAction,
        ctx: &VerificationContext,
    ) -> Result<CheckOutcome, VerificationError> {
        let VerificationAction::Check(submitted) = action;

        if let Some(ttl) = ctx.policy.ttl {
            if ctx.clock.now() - self.issued_at > ttl {
                debug!(phone = %self.phone, "Code expired");
                self.consumed = true;
                return Ok(CheckOutcome::Expired);
            }
        }

        if submitted.trim() == self.code {
            self.consumed = true;
            return Ok(CheckOutcome::Accepted);
        }

        self.attempts += 1;
        if self.attempts >= ctx.policy.max_attempts {
            self.consumed = true;
            Ok(CheckOutcome::Exhausted)
        } else {
            Ok(CheckOutcome::Rejected {
                remaining: ctx.policy.max_attempts - self.attempts,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::VerificationPolicy;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;

    fn setup() -> (VerificationCode, VerificationContext, Arc<FixedClock>) {
        let issued_at = Utc.with_ymd_and_hms(2026, 2, 16, 9, 0, 0).unwrap();
        let clock = Arc::new(FixedClock::new(issued_at));
        let ctx = VerificationContext {
            policy: VerificationPolicy::default(),
            clock: clock.clone(),
        };
        let code = VerificationCode {
            phone: Phone::parse("77001234567").unwrap(),
            code: "123456".to_string(),
            issued_at,
            attempts: 0,
            consumed: false,
        };
        (code, ctx, clock)
    }

    fn check(code: &str) -> VerificationAction {
        VerificationAction::Check(code.to_string())
    }

    #[tokio::test]
    async fn third_mismatch_exhausts_the_code() {
        let (mut code, ctx, _) = setup();
        assert_eq!(
            code.handle_action(check("000000"), &ctx).await,
            Ok(CheckOutcome::Rejected { remaining: 2 })
        );
        assert_eq!(
            code.handle_action(check("000000"), &ctx).await,
            Ok(CheckOutcome::Rejected { remaining: 1 })
        );
        assert!(!code.is_retired());
        assert_eq!(
            code.handle_action(check("000000"), &ctx).await,
            Ok(CheckOutcome::Exhausted)
        );
        assert!(code.is_retired());
    }

    #[tokio::test]
    async fn match_after_a_mismatch_is_accepted() {
        let (mut code, ctx, _) = setup();
        code.handle_action(check("999999"), &ctx).await.unwrap();
        assert_eq!(
            code.handle_action(check("123456"), &ctx).await,
            Ok(CheckOutcome::Accepted)
        );
        assert!(code.is_retired());
    }

    #[tokio::test]
    async fn expired_code_is_discarded_even_when_correct() {
        let (mut code, ctx, clock) = setup();
        clock.advance(Duration::seconds(601));
        assert_eq!(
            code.handle_action(check("123456"), &ctx).await,
            Ok(CheckOutcome::Expired)
        );
        assert!(code.is_retired());
    }

    #[tokio::test]
    async fn no_expiry_without_ttl() {
        let (mut code, mut ctx, clock) = setup();
        ctx.policy.ttl = None;
        clock.advance(Duration::days(30));
        assert_eq!(
            code.handle_action(check("123456"), &ctx).await,
            Ok(CheckOutcome::Accepted)
        );
    }
}
