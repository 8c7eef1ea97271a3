use cosmwasm_std::testing::{message_info, mock_dependencies, MockApi, MockQuerier};
use cosmwasm_std::{from_json, Addr, MemoryStorage, Order, OwnedDeps, Storage};

use dualbridge_nft::contract::*;
use dualbridge_nft::error::ContractError;
use dualbridge_nft::helpers::DO_NOT_MODIFY;
use dualbridge_nft::msg::*;
use dualbridge_nft::state::{Class, Nft};
use dualbridge_nft::{execute, query};

type Deps = OwnedDeps<MemoryStorage, MockApi, MockQuerier>;

fn a(deps: &Deps, name: &str) -> Addr {
    deps.api.addr_make(name)
}

fn snapshot(deps: &Deps) -> Vec<(Vec<u8>, Vec<u8>)> {
    deps.storage.range(None, None, Order::Ascending).collect()
}

fn keep() -> String {
    DO_NOT_MODIFY.to_string()
}

fn issue(deps: &mut Deps, creator: &str, id: &str, mint_restricted: bool, update_restricted: bool) {
    let creator = a(deps, creator);
    execute_issue_class(
        deps.as_mut(),
        message_info(&creator, &[]),
        id.to_string(),
        "Cats".to_string(),
        "{}".to_string(),
        "CAT".to_string(),
        mint_restricted,
        update_restricted,
    )
    .unwrap();
}

fn mint(
    deps: &mut Deps,
    sender: &str,
    class_id: &str,
    token_id: &str,
    receiver: Option<&str>,
) -> Result<cosmwasm_std::Response, ContractError> {
    let sender = a(deps, sender);
    let receiver = receiver.map(|r| a(deps, r).to_string());
    execute_mint_nft(
        deps.as_mut(),
        message_info(&sender, &[]),
        class_id.to_string(),
        token_id.to_string(),
        "Tom".to_string(),
        "ipfs://tom".to_string(),
        "abc123".to_string(),
        "a grey cat".to_string(),
        receiver,
    )
}

fn nft(deps: &Deps, class_id: &str, token_id: &str) -> Nft {
    from_json(query_nft(deps.as_ref(), class_id.to_string(), token_id.to_string()).unwrap()).unwrap()
}

fn supply(deps: &Deps, class_id: &str) -> u64 {
    let res: SupplyResponse = from_json(query_supply(deps.as_ref(), class_id.to_string()).unwrap()).unwrap();
    res.amount
}

// ─── Classes ────────────────────────────────────────────────────────────────

#[test]
fn test_issue_class() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", true, false);

    let class: Class = from_json(query_class(deps.as_ref(), "cats".to_string()).unwrap()).unwrap();
    assert_eq!(class.creator, a(&deps, "alice"));
    assert_eq!(class.symbol, "CAT");
    assert!(class.mint_restricted);
    assert!(!class.update_restricted);
}

#[test]
fn test_issue_class_twice_fails() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);

    let bob = a(&deps, "bob");
    let err = execute_issue_class(
        deps.as_mut(),
        message_info(&bob, &[]),
        "cats".to_string(),
        "Other".to_string(),
        String::new(),
        "OTH".to_string(),
        false,
        false,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::AlreadyExists {
            asset: "cats".to_string()
        }
    );
}

#[test]
fn test_issue_class_rejects_bad_id() {
    let mut deps = mock_dependencies();
    let alice = a(&deps, "alice");
    let err = execute_issue_class(
        deps.as_mut(),
        message_info(&alice, &[]),
        "9lives".to_string(),
        "Cats".to_string(),
        String::new(),
        "CAT".to_string(),
        false,
        false,
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Registry(_)));
}

// ─── Minting ────────────────────────────────────────────────────────────────

#[test]
fn test_restricted_mint_scenario() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", true, false);

    let err = mint(&mut deps, "bob", "cats", "tom", None).unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized(_)));

    mint(&mut deps, "alice", "cats", "tom", Some("bob")).unwrap();
    let tom = nft(&deps, "cats", "tom");
    assert_eq!(tom.owner, a(&deps, "bob"));
    assert_eq!(tom.class_id, "cats");
    assert_eq!(tom.metadata.name, "Tom");
    assert_eq!(supply(&deps, "cats"), 1);
}

#[test]
fn test_unrestricted_mint_defaults_receiver_to_sender() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);

    let res = mint(&mut deps, "bob", "cats", "tom", None).unwrap();
    assert_eq!(nft(&deps, "cats", "tom").owner, a(&deps, "bob"));

    let event = &res.events[0];
    assert_eq!(event.ty, "mint_nft");
    assert!(event
        .attributes
        .iter()
        .any(|attr| attr.key == "receiver" && attr.value == a(&deps, "bob").as_str()));
}

#[test]
fn test_mint_into_unknown_class_fails() {
    let mut deps = mock_dependencies();
    let err = mint(&mut deps, "alice", "dogs", "rex", None).unwrap_err();
    assert_eq!(
        err,
        ContractError::UnknownAsset {
            asset: "dogs".to_string()
        }
    );
}

#[test]
fn test_mint_duplicate_token_fails() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();

    let err = mint(&mut deps, "alice", "cats", "tom", None).unwrap_err();
    assert_eq!(
        err,
        ContractError::AlreadyExists {
            asset: "cats/tom".to_string()
        }
    );
    assert_eq!(supply(&deps, "cats"), 1);
}

// ─── Editing ────────────────────────────────────────────────────────────────

#[test]
fn test_edit_changes_only_requested_fields() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();

    let alice = a(&deps, "alice");
    let res = execute_edit_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
        "Thomas".to_string(),
        keep(),
        String::new(),
    )
    .unwrap();

    let tom = nft(&deps, "cats", "tom");
    assert_eq!(tom.metadata.name, "Thomas");
    assert_eq!(tom.uri, "ipfs://tom");
    assert_eq!(tom.metadata.description, "");

    let changed: Vec<&str> = res.events[0]
        .attributes
        .iter()
        .filter(|attr| attr.key == "changed")
        .map(|attr| attr.value.as_str())
        .collect();
    assert_eq!(changed, vec!["name", "description"]);
}

#[test]
fn test_edit_all_sentinels_is_noop() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();
    let before = snapshot(&deps);

    let alice = a(&deps, "alice");
    let res = execute_edit_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
        keep(),
        keep(),
        keep(),
    )
    .unwrap();

    assert_eq!(snapshot(&deps), before);
    assert!(res.events[0].attributes.iter().all(|attr| attr.key != "changed"));
}

#[test]
fn test_edit_by_non_owner_fails() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();

    let mallory = a(&deps, "mallory");
    let err = execute_edit_nft(
        deps.as_mut(),
        message_info(&mallory, &[]),
        "cats".to_string(),
        "tom".to_string(),
        "Stolen".to_string(),
        keep(),
        keep(),
    )
    .unwrap_err();
    match err {
        ContractError::Unauthorized(err) => {
            assert_eq!(err.actor, mallory.to_string());
            assert_eq!(err.required, a(&deps, "alice").to_string());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_edit_under_update_restriction_fails() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, true);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();

    let alice = a(&deps, "alice");
    let err = execute_edit_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
        "Thomas".to_string(),
        keep(),
        keep(),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized(_)));
}

#[test]
fn test_edit_unknown_token_fails() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);

    let alice = a(&deps, "alice");
    let err = execute_edit_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "ghost".to_string(),
        "Boo".to_string(),
        keep(),
        keep(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::UnknownAsset {
            asset: "cats/ghost".to_string()
        }
    );
}

#[test]
fn test_edit_unknown_token_under_update_restriction_is_unauthorized() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, true);
    let before = snapshot(&deps);

    let alice = a(&deps, "alice");
    let err = execute_edit_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "ghost".to_string(),
        "Boo".to_string(),
        keep(),
        keep(),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized(_)));
    assert_eq!(snapshot(&deps), before);
}

// ─── Transfers ──────────────────────────────────────────────────────────────

#[test]
fn test_pure_transfer_bypasses_update_restriction() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, true);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();

    let alice = a(&deps, "alice");
    let bob = a(&deps, "bob");
    execute_transfer_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
        keep(),
        keep(),
        keep(),
        bob.to_string(),
    )
    .unwrap();
    assert_eq!(nft(&deps, "cats", "tom").owner, bob);
}

#[test]
fn test_transfer_with_edit_respects_update_restriction() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, true);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();
    let before = snapshot(&deps);

    let alice = a(&deps, "alice");
    let bob = a(&deps, "bob");
    let err = execute_transfer_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
        "Thomas".to_string(),
        keep(),
        keep(),
        bob.to_string(),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized(_)));
    assert_eq!(snapshot(&deps), before);
}

#[test]
fn test_transfer_applies_edit_and_owner_together() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();

    let alice = a(&deps, "alice");
    let bob = a(&deps, "bob");
    execute_transfer_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
        keep(),
        "ipfs://tom-v2".to_string(),
        keep(),
        bob.to_string(),
    )
    .unwrap();

    let tom = nft(&deps, "cats", "tom");
    assert_eq!(tom.owner, bob);
    assert_eq!(tom.uri, "ipfs://tom-v2");
    assert_eq!(tom.metadata.name, "Tom");
}

#[test]
fn test_failed_transfer_leaves_state_unchanged() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();
    let before = snapshot(&deps);

    let mallory = a(&deps, "mallory");
    let err = execute_transfer_nft(
        deps.as_mut(),
        message_info(&mallory, &[]),
        "cats".to_string(),
        "tom".to_string(),
        keep(),
        keep(),
        keep(),
        mallory.to_string(),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized(_)));
    assert_eq!(snapshot(&deps), before);
    assert_eq!(nft(&deps, "cats", "tom").owner, a(&deps, "alice"));
}

#[test]
fn test_send_nft() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, true);
    mint(&mut deps, "alice", "cats", "tom", None).unwrap();

    let alice = a(&deps, "alice");
    let bob = a(&deps, "bob");
    let res = execute_send_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
        bob.to_string(),
    )
    .unwrap();
    assert_eq!(res.events[0].ty, "send_nft");

    let owner: OwnerResponse =
        from_json(query_owner(deps.as_ref(), "cats".to_string(), "tom".to_string()).unwrap()).unwrap();
    assert_eq!(owner.owner, bob.to_string());

    let err = execute_send_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
        alice.to_string(),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized(_)));
}

// ─── Burning ────────────────────────────────────────────────────────────────

#[test]
fn test_mint_then_burn_restores_storage() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);
    let before = snapshot(&deps);

    mint(&mut deps, "alice", "cats", "tom", None).unwrap();
    assert_ne!(snapshot(&deps), before);

    let alice = a(&deps, "alice");
    execute_burn_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
    )
    .unwrap();
    assert_eq!(snapshot(&deps), before);
    assert_eq!(supply(&deps, "cats"), 0);
}

#[test]
fn test_burn_requires_owner() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", false, false);
    mint(&mut deps, "alice", "cats", "tom", Some("bob")).unwrap();

    let alice = a(&deps, "alice");
    let err = execute_burn_nft(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        "tom".to_string(),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized(_)));
    assert!(query_nft(deps.as_ref(), "cats".to_string(), "tom".to_string()).is_ok());
}

// ─── Class ownership ────────────────────────────────────────────────────────

#[test]
fn test_transfer_class_ownership_scenario() {
    let mut deps = mock_dependencies();
    issue(&mut deps, "alice", "cats", true, false);

    let bob = a(&deps, "bob");
    let err = execute_transfer_class(
        deps.as_mut(),
        message_info(&bob, &[]),
        "cats".to_string(),
        bob.to_string(),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized(_)));

    let alice = a(&deps, "alice");
    execute_transfer_class(
        deps.as_mut(),
        message_info(&alice, &[]),
        "cats".to_string(),
        bob.to_string(),
    )
    .unwrap();

    let class: Class = from_json(query_class(deps.as_ref(), "cats".to_string()).unwrap()).unwrap();
    assert_eq!(class.creator, bob);
    assert!(class.mint_restricted);
    assert_eq!(class.name, "Cats");

    let err = mint(&mut deps, "alice", "cats", "tom", None).unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized(_)));
    mint(&mut deps, "bob", "cats", "tom", None).unwrap();
}

// ─── Dispatch & queries ─────────────────────────────────────────────────────

#[test]
fn test_dispatch_and_paginated_nfts() {
    let mut deps = mock_dependencies();
    let alice = a(&deps, "alice");
    execute(
        deps.as_mut(),
        message_info(&alice, &[]),
        ExecuteMsg::IssueClass {
            id: "cats".to_string(),
            name: "Cats".to_string(),
            schema: String::new(),
            symbol: "CAT".to_string(),
            mint_restricted: false,
            update_restricted: false,
        },
    )
    .unwrap();

    for token_id in ["c", "a", "b"] {
        execute(
            deps.as_mut(),
            message_info(&alice, &[]),
            ExecuteMsg::MintNft {
                class_id: "cats".to_string(),
                token_id: token_id.to_string(),
                name: String::new(),
                uri: String::new(),
                uri_hash: String::new(),
                description: String::new(),
                receiver: None,
            },
        )
        .unwrap();
    }

    let page: NftsResponse = from_json(
        query(
            deps.as_ref(),
            QueryMsg::Nfts {
                class_id: "cats".to_string(),
                start_after: None,
                limit: Some(2),
            },
        )
        .unwrap(),
    )
    .unwrap();
    let ids: Vec<&str> = page.nfts.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    let rest: NftsResponse = from_json(
        query(
            deps.as_ref(),
            QueryMsg::Nfts {
                class_id: "cats".to_string(),
                start_after: Some("b".to_string()),
                limit: None,
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(rest.nfts.len(), 1);
    assert_eq!(rest.nfts[0].id, "c");
    assert_eq!(supply(&deps, "cats"), 3);
}

#[test]
fn test_query_missing_nft_errors() {
    let deps = mock_dependencies();
    assert!(query_nft(deps.as_ref(), "cats".to_string(), "tom".to_string()).is_err());
    assert!(query_class(deps.as_ref(), "cats".to_string()).is_err());
}
