//! Concurrent order placement
//!
//! Write transactions serialize, so parallel placements must never oversell
//! a material, and a rejected order must leave no stock change and no order
//! row. Workers hammer one scarce material from plain threads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use comanda_server::{Config, ServerState};
use rand::Rng;
use shared::ErrorCode;
use shared::models::{OrderCreate, OrderItemInput, ProductCreate, RawMaterialCreate, RecipeItem};
use tempfile::TempDir;

const WORKERS: usize = 8;
const ATTEMPTS: usize = 200;
const STARTING_STOCK: f64 = 100.0;

fn state_in(dir: &TempDir) -> ServerState {
    let config = Config::with_overrides(dir.path().to_str().unwrap(), 0);
    ServerState::initialize(&config).unwrap()
}

fn seed(state: &ServerState, stock: f64) -> (u64, u64) {
    let material = state
        .inventory
        .create(RawMaterialCreate {
            name: "Dough".to_string(),
            unit: "portion".to_string(),
            quantity: stock,
            min_stock_level: None,
        })
        .unwrap()
        .id;
    let product = state
        .catalog
        .create(ProductCreate {
            name: "Flatbread".to_string(),
            price: 4.0,
            category: None,
            image: None,
            recipe: Some(vec![RecipeItem {
                material_id: material,
                quantity_per_unit: 1.0,
            }]),
        })
        .unwrap()
        .id;
    (material, product)
}

fn order_of(product: u64, quantity: u32) -> OrderCreate {
    OrderCreate {
        items: vec![OrderItemInput {
            product_id: product,
            quantity,
        }],
        order_type: None,
        payment_method: None,
    }
}

#[test]
fn test_two_orders_jointly_overdrawing() {
    let dir = TempDir::new().unwrap();
    let state = state_in(&dir);
    let (material, product) = seed(&state, 5.0);

    // Both want 3 from a stock of 5; exactly one can have it.
    let barrier = Arc::new(Barrier::new(2));
    let mut handles = Vec::new();
    for _ in 0..2 {
        let state = state.clone();
        let barrier = barrier.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            state.orders.place(order_of(product, 3))
        }));
    }

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);

    let failure = results.iter().find(|r| r.is_err()).unwrap();
    assert_eq!(
        failure.as_ref().unwrap_err().code,
        ErrorCode::InsufficientStock
    );

    assert_eq!(state.inventory.get(material).unwrap().quantity, 2.0);
    assert_eq!(state.orders.list().unwrap().len(), 1);
}

#[test]
fn test_workers_never_oversell() {
    let dir = TempDir::new().unwrap();
    let state = state_in(&dir);
    let (material, product) = seed(&state, STARTING_STOCK);

    let attempt_idx = Arc::new(AtomicUsize::new(0));
    let units_sold = Arc::new(AtomicUsize::new(0));
    let orders_placed = Arc::new(AtomicUsize::new(0));
    let rejections = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::with_capacity(WORKERS);
    for _ in 0..WORKERS {
        let state = state.clone();
        let attempt_idx = attempt_idx.clone();
        let units_sold = units_sold.clone();
        let orders_placed = orders_placed.clone();
        let rejections = rejections.clone();

        handles.push(thread::spawn(move || {
            let mut rng = rand::thread_rng();
            loop {
                let i = attempt_idx.fetch_add(1, Ordering::Relaxed);
                if i >= ATTEMPTS {
                    break;
                }
                let quantity = rng.gen_range(1..=3);
                match state.orders.place(order_of(product, quantity)) {
                    Ok(_) => {
                        units_sold.fetch_add(quantity as usize, Ordering::Relaxed);
                        orders_placed.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => {
                        assert_eq!(e.code, ErrorCode::InsufficientStock);
                        rejections.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let units_sold = units_sold.load(Ordering::Relaxed);
    let orders_placed = orders_placed.load(Ordering::Relaxed);
    let rejections = rejections.load(Ordering::Relaxed);

    // Demand (roughly 2 * ATTEMPTS units) far exceeds supply, so the well
    // must have run dry at some point.
    assert!(rejections > 0, "expected some rejections");
    assert!(units_sold as f64 <= STARTING_STOCK);

    // Conservation: every sold unit came out of the stock, exactly once.
    let remaining = state.inventory.get(material).unwrap().quantity;
    assert_eq!(remaining, STARTING_STOCK - units_sold as f64);
    assert!(remaining >= 0.0);

    // Every success left exactly one order row; no failure left any.
    let orders = state.orders.list().unwrap();
    assert_eq!(orders.len(), orders_placed);
    let recorded_units: usize = orders
        .iter()
        .flat_map(|o| o.items.iter())
        .map(|i| i.quantity as usize)
        .sum();
    assert_eq!(recorded_units, units_sold);
}
