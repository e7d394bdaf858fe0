//! In-memory run of the gateway-coordinated GDH message sequence
//!
//! Members form a chain: each folds its exponent onto the value from the
//! previous one, the last member's value goes to the gateway, and every
//! member then gets back "everyone else's exponents plus the gateway's" to
//! finish with its own. The last member's partial value is the chain before
//! it, so it never needs `remove_key`.

use super::{GroupDiffieHellman, RoundKey};
use crate::error::{validate, Error, Result};

/// Keys produced by one protocol run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAgreement {
    /// Key held by the gateway
    pub gateway_key: RoundKey,
    /// Key held by each member, in chain order
    pub member_keys: Vec<RoundKey>,
}

impl GroupAgreement {
    /// Did every member reach the gateway's key?
    pub fn is_consistent(&self) -> bool {
        self.member_keys.iter().all(|&k| k == self.gateway_key)
    }
}

/// Run the GDH exchange for `members` in chain order
pub fn run_chain(
    gateway: &GroupDiffieHellman,
    members: &[GroupDiffieHellman],
) -> Result<GroupAgreement> {
    let parameters = gateway.parameters();
    validate::parameters(
        members.iter().all(|m| m.parameters() == parameters),
        "GDH chain",
        "every member must use the gateway's parameters",
    )?;

    let (last, rest) = members.split_last().ok_or(Error::Protocol {
        context: "GDH chain",
        details: "at least one member is required",
    })?;

    // Chain value before the last member; the bare generator if it is alone
    let mut pre_last = parameters.base();
    for (i, member) in rest.iter().enumerate() {
        pre_last = if i == 0 {
            member.insert_key()
        } else {
            member.insert_round_key(pre_last)
        };
    }
    let full = if rest.is_empty() {
        last.insert_key()
    } else {
        last.insert_round_key(pre_last)
    };
    tracing::trace!(members = members.len(), "GDH chain accumulated");

    let gateway_key = gateway.insert_round_key(full);

    let mut member_keys: Vec<RoundKey> = rest
        .iter()
        .map(|member| {
            let removed = member.remove_key(full);
            member.insert_round_key(gateway.insert_round_key(removed))
        })
        .collect();
    member_keys.push(last.insert_round_key(gateway.insert_round_key(pre_last)));

    tracing::debug!(members = members.len(), "GDH group key agreed");
    Ok(GroupAgreement {
        gateway_key,
        member_keys,
    })
}
