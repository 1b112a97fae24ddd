//! Operations against a real store actor and a scripted gateway.

mod common;

use common::{dec, material, product, suggestion};
use inventory_planner::clients::{InventoryClient, OperationError};
use inventory_planner::forms::{MaterialForm, ValidationError};
use inventory_planner::framework::mock::{collect_dispatches, create_mock_store};
use inventory_planner::framework::StoreActor;
use inventory_planner::gateway::mock::{ApiCall, MockGateway};
use inventory_planner::gateway::GatewayError;
use inventory_planner::model::{MaterialRequirement, NewProduct, NewRawMaterial, ProductCore, ProductUpdate};
use inventory_planner::store::{self, InventoryAction, InventoryState, LocalIdGenerator, Outcome};
use std::sync::Arc;
use std::time::Duration;

/// A running store seeded with `state`, and a client over `mock`.
fn setup(mock: &Arc<MockGateway>, state: InventoryState) -> InventoryClient {
    let (actor, store) = StoreActor::with_state(store::STORE_BUFFER_SIZE, state);
    tokio::spawn(actor.run(LocalIdGenerator::new()));
    InventoryClient::new(mock.clone(), store)
}

#[tokio::test]
async fn test_fetch_materials_replaces_collection() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_list_materials()
        .return_ok(vec![material("1", "Wood", 10)]);
    let client = setup(&mock, InventoryState::default());

    let fetched = client.fetch_materials().await.unwrap();

    let state = client.snapshot().await.unwrap();
    assert_eq!(state.materials, fetched);
    assert_eq!(state.materials, vec![material("1", "Wood", 10)]);
    assert!(!state.loading);
    assert_eq!(state.error, None);
    mock.verify();
}

#[tokio::test]
async fn test_fetch_materials_failure_keeps_materials() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_list_materials()
        .return_err(GatewayError::NetworkUnreachable("X".into()));
    let existing = vec![material("1", "Wood", 10)];
    let client = setup(
        &mock,
        InventoryState {
            materials: existing.clone(),
            ..Default::default()
        },
    );

    let err = client.fetch_materials().await.unwrap_err();
    assert_eq!(err, OperationError::Rejected("X".into()));

    let state = client.snapshot().await.unwrap();
    assert_eq!(state.error.as_deref(), Some("X"));
    assert!(!state.loading);
    assert_eq!(state.materials, existing);
}

#[tokio::test]
async fn test_operation_dispatches_pending_then_outcome() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_delete_product().return_err(GatewayError::Http {
        status: 500,
        message: None,
    });
    let (store, receiver) = create_mock_store::<InventoryState>(10);
    let collector = tokio::spawn(collect_dispatches(receiver));

    let client = InventoryClient::new(mock.clone(), store);
    let err = client.delete_product("4").await.unwrap_err();
    assert_eq!(err, OperationError::Rejected("Failed to delete product.".into()));
    drop(client);

    let actions = collector.await.unwrap();
    assert_eq!(
        actions,
        vec![
            InventoryAction::DeleteProduct(Outcome::Pending),
            InventoryAction::DeleteProduct(Outcome::Rejected(Some(
                "Failed to delete product.".into()
            ))),
        ]
    );
}

#[tokio::test]
async fn test_server_message_reaches_the_store() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_create_material().return_err(GatewayError::Http {
        status: 409,
        message: Some("Material already exists".into()),
    });
    let client = setup(&mock, InventoryState::default());

    let err = client
        .create_material(&MaterialForm::new("Wood", 3))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Material already exists");
    assert_eq!(
        client.snapshot().await.unwrap().error.as_deref(),
        Some("Material already exists")
    );
}

#[tokio::test]
async fn test_create_material_appends() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_create_material()
        .return_ok(material("2", "Steel", 0));
    let client = setup(
        &mock,
        InventoryState {
            materials: vec![material("1", "Wood", 10)],
            ..Default::default()
        },
    );

    client
        .create_material(&MaterialForm::new(" Steel ", 0))
        .await
        .unwrap();

    assert_eq!(
        mock.calls(),
        vec![ApiCall::CreateMaterial(NewRawMaterial::new("Steel", 0))]
    );
    let names: Vec<String> = client
        .snapshot()
        .await
        .unwrap()
        .materials
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Wood", "Steel"]);
}

#[tokio::test]
async fn test_invalid_material_is_never_dispatched() {
    let mock = Arc::new(MockGateway::new());
    let (store, receiver) = create_mock_store::<InventoryState>(10);
    let collector = tokio::spawn(collect_dispatches(receiver));
    let client = InventoryClient::new(mock.clone(), store);

    let blank = client.create_material(&MaterialForm::new("  ", 5)).await;
    assert_eq!(blank, Err(OperationError::Validation(ValidationError::BlankName)));

    let negative = client.create_material(&MaterialForm::new("Wood", -1)).await;
    assert_eq!(
        negative,
        Err(OperationError::Validation(ValidationError::NegativeQuantity))
    );
    drop(client);

    assert!(collector.await.unwrap().is_empty());
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_create_product_posts_core_then_each_material() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_create_product()
        .return_ok(product("10", "Chair", "150"));
    mock.expect_add_product_material()
        .return_ok(MaterialRequirement::new("mat1", 5));
    let client = setup(&mock, InventoryState::default());

    let input = NewProduct::new("Chair", dec("150")).with_material("mat1", 5);
    let created = client.create_product(input).await.unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            ApiCall::CreateProduct(ProductCore {
                name: "Chair".into(),
                value: dec("150"),
            }),
            ApiCall::AddProductMaterial {
                product_id: "10".into(),
                requirement: MaterialRequirement::new("mat1", 5),
            },
        ]
    );
    assert_eq!(created.raw_materials, vec![MaterialRequirement::new("mat1", 5)]);

    let state = client.snapshot().await.unwrap();
    assert_eq!(state.products, vec![created]);
    mock.verify();
}

#[tokio::test]
async fn test_create_product_keeps_server_accepted_associations() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_create_product()
        .return_ok(product("10", "Table", "300"));
    mock.expect_add_product_material()
        .return_ok(MaterialRequirement::new("1", 4));
    mock.expect_add_product_material()
        .return_ok(MaterialRequirement::new("2", 8));
    let client = setup(&mock, InventoryState::default());

    let input = NewProduct::new("Table", dec("300"))
        .with_material("1", 4)
        .with_material("2", 6);
    let created = client.create_product(input).await.unwrap();

    // What the server accepted, in request order.
    assert_eq!(
        created.raw_materials,
        vec![
            MaterialRequirement::new("1", 4),
            MaterialRequirement::new("2", 8)
        ]
    );
}

#[tokio::test]
async fn test_create_product_without_materials_posts_no_associations() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_create_product()
        .return_ok(product("11", "Stool", "40"));
    let client = setup(&mock, InventoryState::default());

    let created = client
        .create_product(NewProduct::new("Stool", dec("40")))
        .await
        .unwrap();

    assert_eq!(mock.calls().len(), 1);
    assert!(created.raw_materials.is_empty());
    assert!(client.snapshot().await.unwrap().products[0]
        .raw_materials
        .is_empty());
}

#[tokio::test]
async fn test_create_product_twice_stores_two_entries() {
    let mock = Arc::new(MockGateway::new());
    for _ in 0..2 {
        mock.expect_create_product()
            .return_ok(product("12", "Bench", "80"));
    }
    let client = setup(&mock, InventoryState::default());

    for _ in 0..2 {
        client
            .create_product(NewProduct::new("Bench", dec("80")))
            .await
            .unwrap();
    }

    assert_eq!(client.snapshot().await.unwrap().products.len(), 2);
}

#[tokio::test]
async fn test_failed_association_rejects_whole_operation_without_rollback() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_create_product()
        .return_ok(product("13", "Desk", "500"));
    mock.expect_add_product_material()
        .return_ok(MaterialRequirement::new("1", 2));
    mock.expect_add_product_material()
        .return_err(GatewayError::Http {
            status: 404,
            message: Some("Raw material not found".into()),
        });
    let client = setup(&mock, InventoryState::default());

    let input = NewProduct::new("Desk", dec("500"))
        .with_material("1", 2)
        .with_material("missing", 1)
        .with_material("3", 1);
    let err = client.create_product(input).await.unwrap_err();
    assert_eq!(err, OperationError::Rejected("Raw material not found".into()));

    // Stops at the failure and never deletes the created product.
    let calls = mock.calls();
    assert_eq!(calls.len(), 3);
    assert!(!calls
        .iter()
        .any(|c| matches!(c, ApiCall::DeleteProduct(_))));

    let state = client.snapshot().await.unwrap();
    assert!(state.products.is_empty());
    assert_eq!(state.error.as_deref(), Some("Raw material not found"));
    mock.verify();
}

#[tokio::test]
async fn test_update_product_replaces_in_place() {
    let mock = Arc::new(MockGateway::new());
    let mut updated = product("1", "Chair", "175");
    updated.raw_materials = vec![MaterialRequirement::new("1", 3)];
    mock.expect_update_product().return_ok(updated.clone());
    let client = setup(
        &mock,
        InventoryState {
            products: vec![product("1", "Chair", "150"), product("2", "Table", "300")],
            ..Default::default()
        },
    );

    let payload = ProductUpdate::from(updated.clone());
    client.update_product("1", payload.clone()).await.unwrap();

    assert_eq!(
        mock.calls(),
        vec![ApiCall::UpdateProduct {
            id: "1".into(),
            update: payload
        }]
    );
    let state = client.snapshot().await.unwrap();
    assert_eq!(state.products, vec![updated, product("2", "Table", "300")]);
}

#[tokio::test]
async fn test_update_of_unknown_product_leaves_products_unchanged() {
    let mock = Arc::new(MockGateway::new());
    let ghost = product("99", "Ghost", "1");
    mock.expect_update_product().return_ok(ghost.clone());
    let existing = vec![product("1", "Chair", "150")];
    let client = setup(
        &mock,
        InventoryState {
            products: existing.clone(),
            ..Default::default()
        },
    );

    client
        .update_product("99", ProductUpdate::from(ghost))
        .await
        .unwrap();

    let state = client.snapshot().await.unwrap();
    assert_eq!(state.products, existing);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_delete_product_removes_by_id() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_delete_product().return_ok(());
    let client = setup(
        &mock,
        InventoryState {
            products: vec![product("1", "Chair", "150"), product("2", "Table", "300")],
            ..Default::default()
        },
    );

    let deleted = client.delete_product("1").await.unwrap();
    assert_eq!(deleted, "1");

    let ids: Vec<String> = client
        .snapshot()
        .await
        .unwrap()
        .products
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["2"]);
}

#[tokio::test]
async fn test_fetch_suggestions_replaces_without_merging() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_list_suggestions()
        .return_ok(vec![suggestion("Chair", 2, "300")]);
    mock.expect_list_suggestions()
        .return_ok(vec![suggestion("Table", 1, "500")]);
    let client = setup(&mock, InventoryState::default());

    client.fetch_suggestions().await.unwrap();
    client.fetch_suggestions().await.unwrap();

    assert_eq!(
        client.snapshot().await.unwrap().suggestions,
        vec![suggestion("Table", 1, "500")]
    );
}

#[tokio::test]
async fn test_new_operation_clears_previous_error() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_list_products()
        .return_err(GatewayError::Timeout(Duration::from_secs(60)));
    mock.expect_list_products().return_ok(vec![]);
    let client = setup(&mock, InventoryState::default());

    assert!(client.fetch_products().await.is_err());
    assert_eq!(
        client.snapshot().await.unwrap().error.as_deref(),
        Some("Request timed out after 60s")
    );

    client.fetch_products().await.unwrap();
    assert_eq!(client.snapshot().await.unwrap().error, None);
}

#[tokio::test]
async fn test_local_actions() {
    let mock = Arc::new(MockGateway::new());
    let client = setup(
        &mock,
        InventoryState {
            error: Some("stale".into()),
            ..Default::default()
        },
    );

    client
        .add_material_locally(NewRawMaterial::new("Glue", 3))
        .await
        .unwrap();
    client.clear_error().await.unwrap();
    client.clear_error().await.unwrap();

    let state = client.snapshot().await.unwrap();
    assert_eq!(state.materials.len(), 1);
    assert_eq!(state.materials[0].name, "Glue");
    assert!(!state.materials[0].id.is_empty());
    assert_eq!(state.error, None);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_subscribers_observe_transitions() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_list_materials()
        .return_ok(vec![material("1", "Wood", 2)]);
    let client = setup(&mock, InventoryState::default());
    let mut updates = client.subscribe();

    client.fetch_materials().await.unwrap();

    updates.changed().await.unwrap();
    let latest = updates.borrow_and_update().clone();
    assert_eq!(latest.materials, vec![material("1", "Wood", 2)]);
    assert!(!latest.loading);
}

#[tokio::test]
async fn test_late_transition_after_store_shutdown_is_tolerated() {
    let mock = Arc::new(MockGateway::new());
    mock.expect_list_suggestions()
        .return_ok(vec![suggestion("Chair", 1, "150")]);
    let (actor, store) = StoreActor::<InventoryState>::new(store::STORE_BUFFER_SIZE);
    drop(actor);
    let client = InventoryClient::new(mock.clone(), store);

    // The store is gone; the caller still gets its value.
    let suggestions = client.fetch_suggestions().await.unwrap();
    assert_eq!(suggestions, vec![suggestion("Chair", 1, "150")]);
}
