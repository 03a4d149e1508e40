use alloy_primitives::B256;

use crate::constants::DURATION;
use crate::event::{DistributorEvent, RootRotated, WindowRotated};
use crate::merkle_distributor;
use crate::test::harness::*;
use crate::{DistributionPhase, DistributorConfig, DistributorError};

#[test]
fn test_create_rejects_zero_roles() {
    let config = DistributorConfig {
        asset: token(),
        operator: operator(),
        owner: owner(),
        vault: vault(),
    };

    assert_error(
        merkle_distributor::create_distributor(DistributorConfig {
            operator: Default::default(),
            ..config
        }),
        DistributorError::InvalidOperator,
    );
    assert_error(
        merkle_distributor::create_distributor(DistributorConfig {
            owner: Default::default(),
            ..config
        }),
        DistributorError::InvalidOwner,
    );

    let distributor = merkle_distributor::create_distributor(config).unwrap();
    assert_eq!(distributor.asset(), token());
    assert_eq!(distributor.operator(), operator());
    assert_eq!(distributor.owner(), owner());
    assert_eq!(distributor.vault(), vault());
    assert_eq!(distributor.merkle_root(), B256::ZERO);
    assert_eq!(distributor.window(), (0, 0));
    assert!(distributor.total_claimed().is_zero());
    assert_eq!(distributor.phase(START), DistributionPhase::Uninitialized);
}

#[test]
fn test_rotate_window_only_operator() {
    let mut fixture = Fixture::native(0);

    assert_error(
        merkle_distributor::rotate_window(fixture.ctx(owner(), START - 100), START),
        DistributorError::OnlyOperator,
    );
    assert_eq!(fixture.distributor.window(), (0, 0));
}

#[test]
fn test_rotate_window_rejects_past_start() {
    let mut fixture = Fixture::native(0);

    assert_error(
        merkle_distributor::rotate_window(fixture.ctx(operator(), START), START),
        DistributorError::InvalidTime,
    );
    assert_error(
        merkle_distributor::rotate_window(fixture.ctx(operator(), START), START - 1),
        DistributorError::InvalidTime,
    );
    assert_eq!(fixture.distributor.window(), (0, 0));
    assert!(fixture.distributor.take_events().is_empty());
}

#[test]
fn test_rotate_window_requires_positive_start() {
    let mut fixture = Fixture::native(0);
    let now = -100;

    // Still in the future, but zero or below would read as an unset window
    for start_time in [-50, 0] {
        assert_error(
            merkle_distributor::rotate_window(fixture.ctx(operator(), now), start_time),
            DistributorError::InvalidTime,
        );
    }
    assert_eq!(fixture.distributor.window(), (0, 0));
    assert!(fixture.distributor.take_events().is_empty());

    merkle_distributor::rotate_window(fixture.ctx(operator(), now), 1).unwrap();
    assert_eq!(fixture.distributor.window(), (1, 1 + DURATION));

    // The window freezes once it opens
    assert_error(
        merkle_distributor::rotate_window(fixture.ctx(operator(), 1), START),
        DistributorError::AlreadyStarted,
    );
}

#[test]
fn test_rotate_window_reschedules_before_opening() {
    let mut fixture = Fixture::native(0);

    merkle_distributor::rotate_window(fixture.ctx(operator(), START - 500), START).unwrap();
    assert_eq!(fixture.distributor.window(), (START, START + DURATION));

    // Still before the scheduled start: the window can move either way
    for new_start in [START + 3_600, START - 200, START + 7 * 24 * 3_600] {
        merkle_distributor::rotate_window(fixture.ctx(operator(), START - 300), new_start).unwrap();
        let (start_time, end_time) = fixture.distributor.window();
        assert_eq!(start_time, new_start);
        assert_eq!(end_time - start_time, DURATION);
    }

    let events = fixture.distributor.take_events();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[0],
        DistributorEvent::WindowRotated(WindowRotated {
            operator: operator(),
            start_time: START,
            end_time: START + DURATION,
        })
    );
}

#[test]
fn test_rotate_window_frozen_once_started() {
    let mut fixture = Fixture::native(0);
    fixture.schedule_window();

    for now in [START, START + 1, START + DURATION, START + DURATION + 1] {
        assert_error(
            merkle_distributor::rotate_window(fixture.ctx(operator(), now), now + 1_000),
            DistributorError::AlreadyStarted,
        );
        // Precedence over the backdating check
        assert_error(
            merkle_distributor::rotate_window(fixture.ctx(operator(), now), now - 1_000),
            DistributorError::AlreadyStarted,
        );
    }

    assert_eq!(fixture.distributor.window(), (START, START + DURATION));
}

#[test]
fn test_rotate_window_overflow() {
    let mut fixture = Fixture::native(0);

    assert_error(
        merkle_distributor::rotate_window(fixture.ctx(operator(), START), i64::MAX),
        DistributorError::ArithmeticOverflow,
    );
    assert_eq!(fixture.distributor.window(), (0, 0));
}

#[test]
fn test_rotate_root() {
    let mut fixture = Fixture::native(0);
    let root = B256::repeat_byte(0x42);

    assert_error(
        merkle_distributor::rotate_root(fixture.ctx(owner(), START), root),
        DistributorError::OnlyOperator,
    );
    assert_error(
        merkle_distributor::rotate_root(fixture.ctx(operator(), START), B256::ZERO),
        DistributorError::InvalidRoot,
    );
    assert_eq!(fixture.distributor.merkle_root(), B256::ZERO);

    merkle_distributor::rotate_root(fixture.ctx(operator(), START), root).unwrap();
    assert_eq!(fixture.distributor.merkle_root(), root);
    assert_eq!(
        fixture.distributor.take_events(),
        vec![DistributorEvent::RootRotated(RootRotated {
            operator: operator(),
            merkle_root: root,
        })]
    );
}

#[test]
fn test_rotate_root_mid_window() {
    let mut fixture = Fixture::native(0);
    fixture.schedule_window();
    fixture.set_root(B256::repeat_byte(0x01));

    // Root is independent of the window freeze
    let replacement = B256::repeat_byte(0x02);
    merkle_distributor::rotate_root(fixture.ctx(operator(), START + 10), replacement).unwrap();
    merkle_distributor::rotate_root(fixture.ctx(operator(), START + DURATION + 10), replacement).unwrap();
    assert_eq!(fixture.distributor.merkle_root(), replacement);
}

#[test]
fn test_phase_projection() {
    let mut fixture = Fixture::native(0);
    assert_eq!(fixture.distributor.phase(START), DistributionPhase::Uninitialized);

    fixture.schedule_window();
    assert_eq!(fixture.distributor.phase(START - 1), DistributionPhase::WindowScheduled);
    // Open window without a root is not claimable
    assert_eq!(fixture.distributor.phase(START), DistributionPhase::WindowScheduled);

    fixture.set_root(B256::repeat_byte(0x01));
    assert_eq!(fixture.distributor.phase(START - 1), DistributionPhase::WindowScheduled);
    assert_eq!(fixture.distributor.phase(START), DistributionPhase::Active);
    assert_eq!(fixture.distributor.phase(START + DURATION), DistributionPhase::Active);
    assert_eq!(fixture.distributor.phase(START + DURATION + 1), DistributionPhase::Expired);
}
