//! Property-style checks for the invariants this executor is required to
//! uphold, expressed as representative cases rather than exhaustive grids.

use semux_executor::account::{AccountState, Direction};
use semux_executor::address::Address;
use semux_executor::amount::{Amount, Sem};
use semux_executor::config::NetworkConfig;
use semux_executor::crypto::{self, generate_keypair};
use semux_executor::delegate::{validate_delegate_name, DelegateState};
use semux_executor::executor::TransactionExecutor;
use semux_executor::result::StatusCode;
use semux_executor::transaction::{Transaction, TransactionKind};

const NETWORK_ID: u8 = 1;

fn config() -> NetworkConfig {
    NetworkConfig::new(NETWORK_ID, Amount::from_nano(10), Sem::of(1000).unwrap())
}

fn addr(byte: u8) -> Address {
    Address::from_slice(&[byte; 20])
}

fn transfer_tx(
    pk: &crypto::PublicKey,
    sk: &crypto::SecretKey,
    to: Address,
    value: Amount,
    fee: Amount,
    nonce: u64,
) -> Transaction {
    let mut tx = Transaction {
        network_id: NETWORK_ID,
        kind: TransactionKind::Transfer,
        to,
        value,
        fee,
        nonce,
        timestamp: 1_700_000_000_000,
        data: vec![],
        public_key: pk.clone(),
        signature: crypto::sign(sk, &[0u8; 32]),
    };
    let hash = tx.hash();
    tx.signature = crypto::sign(sk, &hash.0);
    tx
}

#[test]
fn mass_conservation_across_a_successful_transfer() {
    let accounts = AccountState::new();
    let delegates = DelegateState::new();
    let config = config();
    let executor = TransactionExecutor::new();
    let (pk, sk) = generate_keypair();

    let mut acc_view = accounts.track();
    let mut del_view = delegates.track();
    let to = addr(7);
    let tx = transfer_tx(&pk, &sk, to, Sem::of(10).unwrap(), config.min_transaction_fee, 0);
    let from = tx.from();
    acc_view
        .adjust_available(&from, Sem::of(50).unwrap(), Direction::Credit)
        .unwrap();

    let before = acc_view.get_account(&from).available;
    let result = executor
        .execute(&tx, &config, &mut acc_view, &mut del_view)
        .unwrap();
    assert_eq!(result.status(), StatusCode::Success);

    let after_from = acc_view.get_account(&from).available;
    let after_to = acc_view.get_account(&to).available;
    // available(from)_after + value_moved + fee = available(from)_before
    assert_eq!(
        after_from.sum(Sem::of(10).unwrap()).unwrap().sum(config.min_transaction_fee).unwrap(),
        before
    );
    assert_eq!(after_to, Sem::of(10).unwrap());
}

#[test]
fn nonce_monotonicity() {
    let accounts = AccountState::new();
    let delegates = DelegateState::new();
    let config = config();
    let executor = TransactionExecutor::new();
    let (pk, sk) = generate_keypair();

    let mut acc_view = accounts.track();
    let mut del_view = delegates.track();
    let tx = transfer_tx(&pk, &sk, addr(2), Sem::of(1).unwrap(), config.min_transaction_fee, 0);
    let from = tx.from();
    acc_view
        .adjust_available(&from, Sem::of(100).unwrap(), Direction::Credit)
        .unwrap();

    executor
        .execute(&tx, &config, &mut acc_view, &mut del_view)
        .unwrap();
    assert_eq!(acc_view.get_account(&from).nonce, 1);

    // Replaying the same nonce now fails, and must not advance it further.
    let replay = transfer_tx(&pk, &sk, addr(2), Sem::of(1).unwrap(), config.min_transaction_fee, 0);
    let result = executor
        .execute(&replay, &config, &mut acc_view, &mut del_view)
        .unwrap();
    assert_eq!(result.status(), StatusCode::InvalidNonce);
    assert_eq!(acc_view.get_account(&from).nonce, 1);
}

#[test]
fn delegate_bijection_holds_after_multiple_registrations() {
    let delegates = DelegateState::new();
    let mut view = delegates.track();
    let a = addr(1);
    let b = addr(2);
    assert!(view.register(a, b"alpha"));
    assert!(view.register(b, b"beta"));

    assert_eq!(view.get_delegate_by_name(b"alpha"), Some(a));
    assert_eq!(view.get_delegate_by_name(b"beta"), Some(b));
    assert_eq!(view.get_delegate_by_address(&a).unwrap().name, b"alpha");
    assert_eq!(view.get_delegate_by_address(&b).unwrap().name, b"beta");

    // No name appears twice, and a registered address can't re-register.
    assert!(!view.register(a, b"gamma"));
    assert!(!view.register(addr(3), b"alpha"));
}

#[test]
fn vote_tally_equals_sum_of_edges() {
    let delegates = DelegateState::new();
    let mut view = delegates.track();
    let delegate = addr(9);
    view.register(delegate, b"del");

    view.vote(addr(1), delegate, Sem::of(10).unwrap());
    view.vote(addr(2), delegate, Sem::of(20).unwrap());
    view.vote(addr(3), delegate, Sem::of(5).unwrap());

    let tally = view.get_delegate_by_address(&delegate).unwrap().votes;
    let sum_of_edges = view
        .get_vote(addr(1), delegate)
        .sum(view.get_vote(addr(2), delegate))
        .unwrap()
        .sum(view.get_vote(addr(3), delegate))
        .unwrap();
    assert_eq!(tally, sum_of_edges);
}

#[test]
fn validate_delegate_name_boundary_cases() {
    // Length boundaries.
    assert!(!validate_delegate_name(b"ab"));
    assert!(validate_delegate_name(b"abc"));
    assert!(validate_delegate_name(b"0123456789abcdef")); // 16 bytes
    assert!(!validate_delegate_name(b"0123456789abcdefg")); // 17 bytes

    // Alphabet boundaries: reject anything outside a-z, 0-9, _.
    assert!(validate_delegate_name(b"a_9"));
    assert!(!validate_delegate_name(b"a-9"));
    assert!(!validate_delegate_name(b"A99"));
    assert!(!validate_delegate_name(b"a 9"));
    assert!(!validate_delegate_name("café".as_bytes()));
}
