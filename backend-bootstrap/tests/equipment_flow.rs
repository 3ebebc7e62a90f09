mod common;

use backend_application::commands::team_commands;
use backend_application::queries::{inventory_queries, team_queries};
use backend_application::AppError;
use backend_domain::{EquipmentSlot, TeamId, UserId};

use common::{Harness, BLADE, MAIL, SALVE, TONIC};

const ALICE: UserId = UserId(1);
const BOB: UserId = UserId(2);

#[tokio::test]
async fn onboarding_is_idempotent() {
    let h = Harness::new();
    let first = h.onboard(ALICE).await;
    let second = h.onboard(ALICE).await;
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);

    let teams = team_queries::list_teams(&h.state, ALICE).await.expect("teams");
    assert!(teams[0].is_unlocked);
    assert!(teams[0].unlock_requirement.is_none());
    assert!(teams[1..].iter().all(|team| !team.is_unlocked));
}

#[tokio::test]
async fn equipping_moves_a_grant_between_teams() {
    let h = Harness::new();
    let teams = h.onboard(ALICE).await;
    let blade = h.give(ALICE, BLADE).await;

    team_commands::equip_item(&h.state, ALICE, teams[0], EquipmentSlot::Weapon, blade.id)
        .await
        .expect("equip on team 1");
    let moved =
        team_commands::equip_item(&h.state, ALICE, teams[1], EquipmentSlot::Weapon, blade.id)
            .await
            .expect("equip on team 2");
    assert_eq!(
        moved.equipment.weapon.as_ref().map(|item| item.inventory_id),
        Some(blade.id)
    );
    assert_eq!(moved.total_stats.speed, 5.0);

    let first = team_queries::get_team(&h.state, ALICE, teams[0]).await.expect("team 1");
    assert!(first.equipment.weapon.is_none());
    assert_eq!(first.total_stats.speed, 0.0);

    let again =
        team_commands::equip_item(&h.state, ALICE, teams[1], EquipmentSlot::Weapon, blade.id)
            .await
            .expect("re-equip");
    assert_eq!(
        again.equipment.weapon.as_ref().map(|item| item.inventory_id),
        Some(blade.id)
    );

    let holders = team_queries::list_teams(&h.state, ALICE)
        .await
        .expect("teams")
        .into_iter()
        .filter(|team| team.equipment.weapon.is_some())
        .count();
    assert_eq!(holders, 1);
}

#[tokio::test]
async fn equip_validates_kind_slot_and_owner() {
    let h = Harness::new();
    let teams = h.onboard(ALICE).await;
    let bob_teams = h.onboard(BOB).await;
    let blade = h.give(ALICE, BLADE).await;
    let tonic = h.give(ALICE, TONIC).await;

    let err = team_commands::equip_item(&h.state, ALICE, teams[0], EquipmentSlot::Armor, blade.id)
        .await
        .expect_err("wrong slot");
    assert!(matches!(err, AppError::SlotMismatch));

    let err = team_commands::equip_item(&h.state, ALICE, teams[0], EquipmentSlot::Weapon, tonic.id)
        .await
        .expect_err("consumable");
    assert!(matches!(err, AppError::NotEquipment));

    let err = team_commands::equip_item(&h.state, BOB, bob_teams[0], EquipmentSlot::Weapon, blade.id)
        .await
        .expect_err("foreign grant");
    assert!(matches!(err, AppError::NotOwner(_)));

    let err = team_commands::equip_item(&h.state, BOB, teams[0], EquipmentSlot::Weapon, blade.id)
        .await
        .expect_err("foreign team");
    assert!(matches!(err, AppError::NotOwner(_)));

    let err = team_commands::equip_item(&h.state, ALICE, TeamId(999), EquipmentSlot::Weapon, blade.id)
        .await
        .expect_err("missing team");
    assert!(matches!(err, AppError::NotFound("team")));
}

#[tokio::test]
async fn unequip_clears_and_tolerates_empty_slots() {
    let h = Harness::new();
    let teams = h.onboard(ALICE).await;
    let mail = h.give(ALICE, MAIL).await;

    let equipped =
        team_commands::equip_item(&h.state, ALICE, teams[0], EquipmentSlot::Armor, mail.id)
            .await
            .expect("equip");
    assert_eq!(equipped.total_stats.power, 3);

    let cleared = team_commands::unequip_item(&h.state, ALICE, teams[0], EquipmentSlot::Armor)
        .await
        .expect("unequip");
    assert!(cleared.equipment.armor.is_none());
    assert_eq!(cleared.total_stats.power, 0);

    team_commands::unequip_item(&h.state, ALICE, teams[0], EquipmentSlot::Armor)
        .await
        .expect("unequip empty slot");
    assert!(h.grant(mail.id).await.is_some());
}

#[tokio::test]
async fn consuming_raises_base_stats_permanently() {
    let h = Harness::new();
    let teams = h.onboard(ALICE).await;
    h.give(ALICE, TONIC).await;
    let tonic = h.give(ALICE, TONIC).await;
    assert_eq!(tonic.quantity, 2);

    let once = team_commands::consume_item(&h.state, ALICE, teams[0], tonic.id)
        .await
        .expect("consume");
    assert_eq!(once.base_stats.speed, 10.0);
    assert_eq!(once.base_stats.luck, 1.0);
    assert_eq!(once.base_stats.power, 4);
    assert_eq!(h.grant(tonic.id).await.map(|g| g.quantity), Some(1));

    let twice = team_commands::consume_item(&h.state, ALICE, teams[0], tonic.id)
        .await
        .expect("consume");
    assert_eq!(twice.base_stats.speed, 20.0);
    assert!(h.grant(tonic.id).await.is_none());

    let err = team_commands::consume_item(&h.state, ALICE, teams[0], tonic.id)
        .await
        .expect_err("used up");
    assert!(matches!(err, AppError::NotFound("inventory item")));

    let blade = h.give(ALICE, BLADE).await;
    let err = team_commands::consume_item(&h.state, ALICE, teams[0], blade.id)
        .await
        .expect_err("equipment");
    assert!(matches!(err, AppError::NotConsumable));
}

#[tokio::test]
async fn inventory_splits_and_orders_grants() {
    let h = Harness::new();
    let teams = h.onboard(ALICE).await;
    let blade = h.give(ALICE, BLADE).await;
    h.clock.advance_minutes(1);
    let mail = h.give(ALICE, MAIL).await;
    h.give(ALICE, TONIC).await;
    h.give(ALICE, SALVE).await;
    h.give(ALICE, SALVE).await;

    team_commands::unlock_team(&h.state, ALICE, teams[2])
        .await
        .expect("unlock");
    team_commands::equip_item(&h.state, ALICE, teams[2], EquipmentSlot::Weapon, blade.id)
        .await
        .expect("equip");

    let inventory = inventory_queries::get_inventory(&h.state, ALICE)
        .await
        .expect("inventory");
    let equipment: Vec<_> = inventory.equipment.iter().map(|v| v.inventory_id).collect();
    assert_eq!(equipment, vec![mail.id, blade.id]);
    assert!(!inventory.equipment[0].is_equipped);
    assert_eq!(inventory.equipment[1].equipped_by_team_number, Some(3));

    let consumables: Vec<(&str, u32)> = inventory
        .consumables
        .iter()
        .map(|v| (v.loot_item.name.as_str(), v.quantity))
        .collect();
    assert_eq!(consumables, vec![("Amber Salve", 2), ("Swift Tonic", 1)]);
    assert!(inventory.consumables.iter().all(|v| !v.is_equipped));

    let bob = inventory_queries::get_inventory(&h.state, BOB)
        .await
        .expect("empty inventory");
    assert!(bob.equipment.is_empty() && bob.consumables.is_empty());
}
