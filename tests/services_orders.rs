use restaurant_orders::forms::orders::PlaceOrderForm;
use restaurant_orders::repository::{CustomerReader, DieselRepository, OrderReader};
use restaurant_orders::services::ServiceError;
use restaurant_orders::services::menu::load_menu;
use restaurant_orders::services::orders::{OrderPlacementError, PlacementOutcome, place_order};
use restaurant_orders::services::tracking::track_order;

mod common;

const TOKEN: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

fn order_form(dish_id: i32, submission_id: Option<&str>) -> PlaceOrderForm {
    PlaceOrderForm {
        customer_name: "Ana".to_string(),
        customer_email: "a@x.com".to_string(),
        dish_id,
        quantity: 2,
        submission_id: submission_id.map(str::to_string),
    }
}

#[test]
fn menu_has_one_option_per_dish() {
    let test_db = common::TestDb::new("service_menu_options.db");
    test_db.seed_dish(3, "Pho", 1150);
    test_db.seed_dish(7, "Bibimbap", 1395);
    let repo = DieselRepository::new(test_db.pool());

    let menu = load_menu(&repo).expect("load menu");

    assert_eq!(menu.options.len(), 2);
    assert_eq!(menu.options[0].value, 3);
    assert_eq!(menu.options[1].value, 7);
    assert_eq!(menu.cards[0].price, "$11.50");
}

#[test]
fn placed_order_links_customer_order_and_detail() {
    let test_db = common::TestDb::new("service_order_chain.db");
    test_db.seed_dish(7, "Bibimbap", 1395);
    let repo = DieselRepository::new(test_db.pool());

    let placed = place_order(&repo, order_form(7, None)).expect("place order");

    let order = repo
        .get_order_by_id(placed.order_id)
        .expect("get order")
        .expect("order should exist");
    let customer = repo
        .get_customer_by_id(order.customer_id)
        .expect("get customer")
        .expect("customer should exist");
    let details = repo
        .list_order_details(order.id)
        .expect("list order details");

    assert_eq!(customer.id, placed.customer_id);
    assert_eq!(customer.first_name, "Ana");
    assert_eq!(order.total_amount, 0);
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].order_id, order.id);
    assert_eq!(details[0].dish_id, 7);
    assert_eq!(details[0].quantity, 2);
    assert_eq!(
        placed.confirmation_message(),
        format!("Order placed successfully! Your Order ID: {}", order.id)
    );
}

#[test]
fn repeated_orders_create_duplicate_customers() {
    let test_db = common::TestDb::new("service_duplicate_customers.db");
    test_db.seed_dish(7, "Bibimbap", 1395);
    let repo = DieselRepository::new(test_db.pool());

    let first = place_order(&repo, order_form(7, None)).expect("first order");
    let second = place_order(&repo, order_form(7, None)).expect("second order");

    assert_ne!(first.customer_id, second.customer_id);
    assert_eq!(test_db.count_customers(), 2);
    assert_eq!(test_db.count_orders(), 2);
}

#[test]
fn customer_failure_writes_nothing() {
    let test_db = common::TestDb::new("service_customer_failure.db");
    test_db.seed_dish(7, "Bibimbap", 1395);
    test_db.reject_inserts_into("customers");
    let repo = DieselRepository::new(test_db.pool());

    let result = place_order(&repo, order_form(7, None));

    assert!(matches!(
        result,
        Err(ServiceError::OrderPlacement(OrderPlacementError::Customer { .. }))
    ));
    assert_eq!(test_db.count_customers(), 0);
    assert_eq!(test_db.count_orders(), 0);
    assert_eq!(test_db.count_order_details(), 0);
}

#[test]
fn order_failure_leaves_orphan_customer() {
    let test_db = common::TestDb::new("service_order_failure.db");
    test_db.seed_dish(7, "Bibimbap", 1395);
    test_db.reject_inserts_into("orders");
    let repo = DieselRepository::new(test_db.pool());

    let result = place_order(&repo, order_form(7, None));

    assert!(matches!(
        result,
        Err(ServiceError::OrderPlacement(OrderPlacementError::Order { .. }))
    ));
    assert_eq!(test_db.count_customers(), 1);
    assert_eq!(test_db.count_orders(), 0);
    assert_eq!(test_db.count_order_details(), 0);
}

#[test]
fn detail_failure_leaves_customer_and_order() {
    let test_db = common::TestDb::new("service_detail_failure.db");
    let repo = DieselRepository::new(test_db.pool());

    // Dish 999 is not on the menu, so the store rejects the order line.
    let result = place_order(&repo, order_form(999, None));

    let order_id = match result {
        Err(ServiceError::OrderPlacement(err)) => {
            assert_eq!(err.stage(), "order_detail");
            err.committed_order_id().expect("order id should be reported")
        }
        other => panic!("expected order detail failure, got {other:?}"),
    };

    assert_eq!(test_db.count_customers(), 1);
    assert_eq!(test_db.count_orders(), 1);
    assert_eq!(test_db.count_order_details(), 0);
    assert!(repo.get_order_by_id(order_id).expect("get order").is_some());
}

#[test]
fn submission_token_resumes_and_deduplicates() {
    let test_db = common::TestDb::new("service_submission_token.db");
    test_db.seed_dish(7, "Bibimbap", 1395);
    let repo = DieselRepository::new(test_db.pool());

    let failed = place_order(&repo, order_form(999, Some(TOKEN)));
    let order_id = match failed {
        Err(ServiceError::OrderPlacement(err)) => err
            .committed_order_id()
            .expect("order id should be reported"),
        other => panic!("expected order detail failure, got {other:?}"),
    };

    let resumed = place_order(&repo, order_form(7, Some(TOKEN))).expect("resume order");
    assert_eq!(resumed.order_id, order_id);
    assert_eq!(resumed.outcome, PlacementOutcome::Resumed);
    assert_eq!(resumed.detail.dish_id, 7);

    let repeated = place_order(&repo, order_form(7, Some(TOKEN))).expect("repeat order");
    assert_eq!(repeated.order_id, order_id);
    assert_eq!(repeated.outcome, PlacementOutcome::Duplicate);

    assert_eq!(test_db.count_customers(), 1);
    assert_eq!(test_db.count_orders(), 1);
    assert_eq!(test_db.count_order_details(), 1);
}

#[test]
fn tracking_unknown_order_is_not_found() {
    let test_db = common::TestDb::new("service_tracking_unknown.db");
    test_db.seed_delivery(55, "Delivered", None);
    let repo = DieselRepository::new(test_db.pool());

    assert!(track_order(&repo, 55).is_ok());
    assert!(matches!(track_order(&repo, 56), Err(ServiceError::NotFound)));
}
