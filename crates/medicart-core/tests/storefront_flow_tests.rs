//! End-to-end storefront flows: browse → cart → checkout → tracking.

use anyhow::Result;

use medicart_core::cart::Cart;
use medicart_core::checkout::{
    build_order_payload, compute_total, requires_prescription, PaymentMethod, PrescriptionFile,
    ShippingAddress, ValidationError,
};
use medicart_core::models::{CustomerProfile, CustomerSession, Medicine, OrderStatus};
use medicart_core::session::Sessions;
use medicart_core::store::{KeyValueStore, MemoryStore, SqliteStore};
use medicart_core::tracking::{assign_courier, step_index};
use medicart_core::{open_store_in_memory, FfiCartLine, FfiShippingAddress};

fn make_medicine(id: &str, price: f64, prescription_required: bool) -> Medicine {
    let mut med = Medicine::new(id.into(), format!("Medicine {id}"), "Pain Relief".into(), price);
    med.quantity = 50;
    med.manufacturer = "Cipla".into();
    med.prescription_required = prescription_required;
    med
}

fn address() -> ShippingAddress {
    ShippingAddress {
        street: "12 MG Road".into(),
        city: "Pune".into(),
        zip_code: "411001".into(),
    }
}

#[test]
fn test_add_twice_then_total() {
    let store = MemoryStore::new();
    let cart = Cart::new(&store);
    let medicine = make_medicine("m1", 50.0, false);

    cart.add_item(&medicine, 1).unwrap();
    cart.add_item(&medicine, 2).unwrap();

    let items = cart.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 3);
    assert_eq!(compute_total(&items), 150.0);
}

#[test]
fn test_prescription_gate_blocks_then_passes() -> Result<()> {
    let store = MemoryStore::new();
    let cart = Cart::new(&store);
    cart.add_item(&make_medicine("m1", 120.0, true), 1)?;

    let items = cart.items()?;
    assert!(requires_prescription(&items));

    let blocked = build_order_payload(
        "asha@example.com",
        &items,
        &address(),
        PaymentMethod::CashOnDelivery,
        None,
    );
    assert_eq!(blocked.unwrap_err(), ValidationError::MissingPrescription);

    let payload = build_order_payload(
        "asha@example.com",
        &items,
        &address(),
        PaymentMethod::CashOnDelivery,
        Some(PrescriptionFile {
            file_name: "rx.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![0xff, 0xd8],
        }),
    )?;
    assert_eq!(payload.total, 120.0);

    // Confirmed submission clears the cart
    cart.clear()?;
    assert!(cart.is_empty()?);
    Ok(())
}

#[test]
fn test_full_flow_on_sqlite_store() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storefront.db");

    {
        let store = SqliteStore::open(&path)?;
        let cart = Cart::new(&store);
        cart.add_item(&make_medicine("m1", 50.0, false), 2)?;

        Sessions::new(&store).save_customer(&CustomerSession {
            token: "tok".into(),
            customer: CustomerProfile {
                name: "Asha Rao".into(),
                email: "asha@example.com".into(),
                phone: "98765 43210".into(),
            },
        })?;
    }

    // Cart and session survive a restart of the shell
    let store = SqliteStore::open(&path)?;
    let cart = Cart::new(&store);
    assert_eq!(cart.items()?[0].quantity, 2);

    let customer = Sessions::new(&store).customer()?.unwrap();
    let payload = build_order_payload(
        &customer.customer.email,
        &cart.items()?,
        &address(),
        PaymentMethod::CreditCard,
        None,
    )?;
    assert_eq!(payload.customer, "asha@example.com");
    assert_eq!(payload.total, 100.0);
    Ok(())
}

#[test]
fn test_tracking_projection_for_fetched_orders() {
    // Backend strings as they arrive over the wire
    assert_eq!(step_index(OrderStatus::parse_lenient("Delivered")), Some(3));
    assert_eq!(step_index(OrderStatus::parse_lenient("Cancelled")), None);
    assert_eq!(step_index(OrderStatus::parse_lenient("Unknown")), Some(0));

    // Courier assignment is pure in the order id
    let order_id = uuid::Uuid::new_v4().to_string();
    assert_eq!(assign_courier(&order_id), assign_courier(&order_id));
}

#[test]
fn test_ffi_facade_flow() {
    let core = open_store_in_memory().unwrap();

    core.save_customer_session(
        medicart_core::FfiCustomerSession {
            token: "tok".into(),
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "98765 43210".into(),
        },
    )
    .unwrap();

    core.add_to_cart(FfiCartLine {
        id: "m1".into(),
        name: "Paracetamol 500mg".into(),
        price: 50.0,
        manufacturer: "Cipla".into(),
        prescription_required: false,
        quantity: 1,
    })
    .unwrap();
    core.add_to_cart(FfiCartLine {
        id: "m1".into(),
        name: "Paracetamol 500mg".into(),
        price: 50.0,
        manufacturer: "Cipla".into(),
        prescription_required: false,
        quantity: 2,
    })
    .unwrap();

    assert_eq!(core.cart_items().unwrap().len(), 1);
    assert_eq!(core.cart_total().unwrap(), 150.0);
    assert!(!core.cart_requires_prescription().unwrap());

    let payload = core
        .build_checkout(
            FfiShippingAddress {
                street: "12 MG Road".into(),
                city: "Pune".into(),
                zip_code: "411001".into(),
            },
            "Cash on Delivery".into(),
            None,
        )
        .unwrap();
    assert_eq!(payload.customer, "asha@example.com");
    assert_eq!(payload.total, 150.0);
    assert_eq!(payload.address, "12 MG Road, Pune - 411001");

    core.clear_cart().unwrap();
    assert!(core.cart_items().unwrap().is_empty());
}

#[test]
fn test_store_clear_wipes_everything() -> Result<()> {
    let store = MemoryStore::new();
    Cart::new(&store).add_item(&make_medicine("m1", 50.0, false), 1)?;
    store.set("customer", "{}")?;

    store.clear()?;
    assert!(Cart::new(&store).items()?.is_empty());
    assert!(store.get("customer")?.is_none());
    Ok(())
}
