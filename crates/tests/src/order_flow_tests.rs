use pretty_assertions::assert_eq;
use shared_types::{catalog, OrderBook, OrderStatus, UNASSIGNED_PARTNER};

use crate::common::{order_request, seeded_rng, today};

#[test]
fn placing_an_order_adds_exactly_one_entry_at_the_front() {
    let mut book = OrderBook::new(catalog::vendor_orders());
    let before = book.len();
    let previous_first = book.orders()[0].id.clone();

    let id = book
        .place(&order_request(), &mut seeded_rng(), today())
        .unwrap()
        .id
        .clone();

    assert_eq!(book.len(), before + 1);
    assert_eq!(book.orders()[0].id, id);
    assert_eq!(book.orders()[1].id, previous_first);
}

#[test]
fn placed_order_shows_up_as_pending_today() {
    let mut book = OrderBook::new(catalog::vendor_orders());
    let order = book
        .place(&order_request(), &mut seeded_rng(), today())
        .unwrap()
        .clone();

    assert_eq!(order.id, "ORD004");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.date, "2024-01-17");
    assert_eq!(order.time, "09:15 am");
    assert_eq!(order.delivery_partner, UNASSIGNED_PARTNER);
    assert!(order.is_editable());
    assert_eq!(book.recent(2)[0], order);
}

#[test]
fn two_placements_keep_newest_first() {
    let mut book = OrderBook::new(catalog::vendor_orders());
    let mut rng = seeded_rng();
    book.place(&order_request(), &mut rng, today()).unwrap();
    book.place(&order_request(), &mut rng, today()).unwrap();

    let ids: Vec<_> = book.orders().iter().take(2).map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ORD005", "ORD004"]);
}

#[test]
fn incomplete_form_leaves_the_list_untouched() {
    let mut book = OrderBook::new(catalog::vendor_orders());
    let mut request = order_request();
    request.address = "   ".into();

    let err = book.place(&request, &mut seeded_rng(), today()).unwrap_err();
    assert_eq!(err.message, "Please fill in all required fields.");
    assert_eq!(book.len(), catalog::vendor_orders().len());
}
