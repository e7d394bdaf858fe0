//! Cross-crate Group Diffie-Hellman tests

use wsnkey_exchange::gdh::{mod_exp, run_chain, GroupDiffieHellman, Parameters};
use wsnkey_exchange::Result;
use wsnkey_params::traditional::dh::{GDH_DEFAULT_BASE, GDH_DEFAULT_MODULUS};
use wsnkey_tests::seeded_rng;
use wsnkey_tests::vectors::GDH_VECTORS;

fn members(parameters: Parameters, exponents: &[u64]) -> Result<Vec<GroupDiffieHellman>> {
    exponents
        .iter()
        .map(|&k| GroupDiffieHellman::from_private_key(parameters, k))
        .collect()
}

#[test]
fn test_default_parameters() {
    let p = Parameters::default();
    assert_eq!(p.base(), GDH_DEFAULT_BASE);
    assert_eq!(p.modulus(), GDH_DEFAULT_MODULUS);
}

#[test]
fn test_known_answer_chains() -> Result<()> {
    let parameters = Parameters::default();
    for v in GDH_VECTORS {
        let group = members(parameters, v.members)?;
        let gateway = GroupDiffieHellman::from_private_key(parameters, v.gateway)?;

        // Chain values in order
        let mut value = group[0].insert_key();
        assert_eq!(value, v.round_keys[0]);
        for (member, &expected) in group[1..].iter().zip(&v.round_keys[1..]) {
            value = member.insert_round_key(value);
            assert_eq!(value, expected);
        }

        let agreement = run_chain(&gateway, &group)?;
        assert_eq!(agreement.gateway_key, v.group_key);
        assert!(agreement.is_consistent());
    }
    Ok(())
}

#[test]
fn test_seven_step_protocol() -> Result<()> {
    let mut rng = seeded_rng(7);

    // Step 1: the gateway hands out parameters
    let parameters = Parameters::default();
    let first = GroupDiffieHellman::with_parameters(parameters, &mut rng);
    let intermediate = GroupDiffieHellman::with_parameters(parameters, &mut rng);
    let last = GroupDiffieHellman::with_parameters(parameters, &mut rng);
    let gateway = GroupDiffieHellman::with_parameters(parameters, &mut rng);

    // Steps 2-4: accumulate along the chain
    let r1 = first.insert_key();
    let r2 = intermediate.insert_round_key(r1);
    let r3 = last.insert_round_key(r2);

    // Step 5
    let gateway_key = gateway.insert_round_key(r3);

    // Step 6: members strip their own exponent, the gateway adds its own
    let to_first = gateway.insert_round_key(first.remove_key(r3));
    let to_intermediate = gateway.insert_round_key(intermediate.remove_key(r3));
    let to_last = gateway.insert_round_key(r2);

    // Step 7
    assert_eq!(first.insert_round_key(to_first), gateway_key);
    assert_eq!(intermediate.insert_round_key(to_intermediate), gateway_key);
    assert_eq!(last.insert_round_key(to_last), gateway_key);
    Ok(())
}

#[test]
fn test_large_groups_agree() -> Result<()> {
    let mut rng = seeded_rng(8);
    let gateway = GroupDiffieHellman::new(&mut rng);
    let group: Vec<_> = (0..25).map(|_| GroupDiffieHellman::new(&mut rng)).collect();
    let agreement = run_chain(&gateway, &group)?;
    assert_eq!(agreement.member_keys.len(), 25);
    assert!(agreement.is_consistent());
    Ok(())
}

#[test]
fn test_custom_prime_group() -> Result<()> {
    // 2 generates the multiplicative group modulo 1019
    let parameters = Parameters::new(2, 1019)?;
    let mut rng = seeded_rng(9);
    let gateway = GroupDiffieHellman::with_parameters(parameters, &mut rng);
    let group: Vec<_> = (0..4)
        .map(|_| GroupDiffieHellman::with_parameters(parameters, &mut rng))
        .collect();
    assert!(run_chain(&gateway, &group)?.is_consistent());
    Ok(())
}

#[test]
fn test_two_member_commutativity() {
    let q = GDH_DEFAULT_MODULUS;
    let mut rng = seeded_rng(10);
    let p1 = GroupDiffieHellman::new(&mut rng);
    let p2 = GroupDiffieHellman::new(&mut rng);
    assert_eq!(
        p2.insert_round_key(p1.insert_key()),
        p1.insert_round_key(p2.insert_key())
    );
    assert_eq!(mod_exp(mod_exp(7, 11, q), 13, q), mod_exp(mod_exp(7, 13, q), 11, q));
}
