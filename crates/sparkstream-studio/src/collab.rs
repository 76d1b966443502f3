use std::collections::HashSet;

use serde::Serialize;
use sparkstream_core::Collaborator;

use crate::error::StudioError;
use crate::slot::{Slot, Ticket};

/// Niche the collab search starts with.
pub const DEFAULT_COLLAB_NICHE: &str = "StudyTok";

/// Confirmation text shown before a paid connection.
#[must_use]
pub fn payment_prompt(collab: &Collaborator) -> String {
    format!(
        "This collaboration requires a {} connection fee of ${}. Proceed to payment?",
        collab.tier, collab.price
    )
}

/// What happened when the user asked to connect with a collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConnectOutcome {
    /// Connected. `fee` is the simulated payment for paid tiers.
    Connected { key: String, fee: Option<f64> },
    AlreadyConnected { key: String },
    /// The user declined the payment confirmation.
    Declined,
}

/// Collaborator search results and the set of connected collaborators.
#[derive(Debug)]
pub struct CollabHub {
    niche: String,
    results: Slot<Collaborator>,
    connected: HashSet<String>,
}

impl Default for CollabHub {
    fn default() -> Self {
        Self {
            niche: DEFAULT_COLLAB_NICHE.to_owned(),
            results: Slot::default(),
            connected: HashSet::new(),
        }
    }
}

impl CollabHub {
    #[must_use]
    pub fn niche(&self) -> &str {
        &self.niche
    }

    #[must_use]
    pub fn results(&self) -> &Slot<Collaborator> {
        &self.results
    }

    #[must_use]
    pub fn is_connected(&self, collab: &Collaborator) -> bool {
        self.connected.contains(collab.connection_key())
    }

    pub(crate) fn begin_search(&mut self, niche: Option<&str>) -> Result<Ticket, StudioError> {
        let candidate = niche.unwrap_or(&self.niche);
        if candidate.trim().is_empty() {
            return Err(StudioError::EmptyInput("niche"));
        }
        if let Some(niche) = niche {
            niche.clone_into(&mut self.niche);
        }
        Ok(self.results.begin())
    }

    pub(crate) fn finish_search(&mut self, ticket: Ticket, results: Vec<Collaborator>) -> bool {
        self.results.complete(ticket, results)
    }

    /// Connects with the collaborator at `index`.
    ///
    /// Free collaborators connect straight away. Paid and premium ones call
    /// `confirm` with [`payment_prompt`] first and connect only if it
    /// returns `true`. No money moves.
    ///
    /// # Errors
    ///
    /// [`StudioError::NoSuchItem`] if `index` is out of range.
    pub fn connect<F>(&mut self, index: usize, confirm: F) -> Result<ConnectOutcome, StudioError>
    where
        F: FnOnce(&str) -> bool,
    {
        let collab = self.results.get(index).ok_or(StudioError::NoSuchItem {
            kind: "collaborator",
            index,
        })?;
        let key = collab.connection_key().to_owned();

        if self.connected.contains(&key) {
            return Ok(ConnectOutcome::AlreadyConnected { key });
        }

        let fee = if collab.tier.requires_payment() {
            if !confirm(&payment_prompt(collab)) {
                tracing::info!(collaborator = %key, "paid connection declined");
                return Ok(ConnectOutcome::Declined);
            }
            Some(collab.price)
        } else {
            None
        };

        tracing::info!(collaborator = %key, tier = %collab.tier, "collaborator connected");
        self.connected.insert(key.clone());
        Ok(ConnectOutcome::Connected { key, fee })
    }
}

#[cfg(test)]
mod tests {
    use sparkstream_core::Tier;

    use super::*;

    fn collab(name: &str, tier: Tier, price: f64) -> Collaborator {
        Collaborator {
            id: String::new(),
            name: name.to_owned(),
            handle: format!("@{name}"),
            niche: "StudyTok".to_owned(),
            follower_count: "12.5k".to_owned(),
            engagement_rate: "8.2%".to_owned(),
            match_score: 90,
            reason: "overlap".to_owned(),
            collab_idea: "duet".to_owned(),
            tier,
            price,
        }
    }

    fn hub_with(results: Vec<Collaborator>) -> CollabHub {
        let mut hub = CollabHub::default();
        let ticket = hub.begin_search(None).unwrap();
        hub.finish_search(ticket, results);
        hub
    }

    #[test]
    fn payment_prompt_mentions_tier_and_price() {
        assert_eq!(
            payment_prompt(&collab("Dev", Tier::Premium, 300.0)),
            "This collaboration requires a Premium connection fee of $300. Proceed to payment?"
        );
    }

    #[test]
    fn free_tier_connects_without_confirmation() {
        let mut hub = hub_with(vec![collab("Maya", Tier::Free, 0.0)]);
        let outcome = hub
            .connect(0, |_| panic!("free tier must not ask for payment"))
            .unwrap();
        assert_eq!(
            outcome,
            ConnectOutcome::Connected {
                key: "Maya".to_owned(),
                fee: None
            }
        );
        assert!(hub.is_connected(&hub.results().items()[0].clone()));
    }

    #[test]
    fn paid_tier_declined_stays_unconnected() {
        let mut hub = hub_with(vec![collab("Dev", Tier::Paid, 150.0)]);
        let mut asked = String::new();
        let outcome = hub
            .connect(0, |message| {
                asked = message.to_owned();
                false
            })
            .unwrap();
        assert_eq!(outcome, ConnectOutcome::Declined);
        assert!(asked.contains("Paid connection fee of $150"));
        assert!(!hub.is_connected(&hub.results().items()[0].clone()));
    }

    #[test]
    fn paid_tier_confirmed_connects_with_fee() {
        let mut hub = hub_with(vec![collab("Dev", Tier::Paid, 150.0)]);
        let outcome = hub.connect(0, |_| true).unwrap();
        assert_eq!(
            outcome,
            ConnectOutcome::Connected {
                key: "Dev".to_owned(),
                fee: Some(150.0)
            }
        );
    }

    #[test]
    fn second_connect_reports_already_connected() {
        let mut hub = hub_with(vec![collab("Maya", Tier::Free, 0.0)]);
        hub.connect(0, |_| true).unwrap();
        assert_eq!(
            hub.connect(0, |_| true).unwrap(),
            ConnectOutcome::AlreadyConnected {
                key: "Maya".to_owned()
            }
        );
    }

    #[test]
    fn empty_niche_is_rejected() {
        let mut hub = CollabHub::default();
        assert_eq!(
            hub.begin_search(Some("")),
            Err(StudioError::EmptyInput("niche"))
        );
        assert!(!hub.results().is_loading());
    }

    #[test]
    fn rejected_niche_keeps_the_previous_one() {
        let mut hub = CollabHub::default();
        assert!(hub.begin_search(Some("   ")).is_err());
        assert_eq!(hub.niche(), "StudyTok");
        assert!(hub.begin_search(None).is_ok());
        assert!(hub.results().is_loading());
    }

    #[test]
    fn connect_out_of_range_is_an_error() {
        let mut hub = CollabHub::default();
        assert!(matches!(
            hub.connect(0, |_| true),
            Err(StudioError::NoSuchItem { index: 0, .. })
        ));
    }
}
