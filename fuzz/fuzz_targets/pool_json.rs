use honggfuzz::fuzz;

use weighted_pool::Pool;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
                if let Ok(pool) = Pool::<serde_json::Value>::from_json(value.clone()) {
                    if !pool.is_empty() {
                        assert!(pool.get(pool.len() - 1).is_some());
                    }
                    assert_eq!(pool.get(pool.len()), None);
                }
                Pool::<serde_json::Value>::float_json(value).ok();
            }
        });
    }
}
