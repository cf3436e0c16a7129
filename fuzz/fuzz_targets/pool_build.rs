use honggfuzz::fuzz;

use weighted_pool::Pool;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let pool = Pool::from_elements(data.iter().enumerate().map(|(i, &w)| (i, u64::from(w))))
                .unwrap();
            let mut expected = data
                .iter()
                .enumerate()
                .flat_map(|(i, &w)| std::iter::repeat(i).take(usize::from(w)));
            for slot in 0..pool.len() {
                let index = pool.locate(slot).unwrap();
                assert!(pool.bounds(index).unwrap().contains(&slot));
                assert_eq!(Some(index), expected.next());
            }
            assert_eq!(expected.next(), None);
            assert_eq!(pool.get(pool.len()), None);
        });
    }
}
