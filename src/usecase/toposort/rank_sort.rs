use crate::domain::graph::Ranking;

/// Reverse counting sort over ranks.
///
/// Returns `dest`, where `dest[i]` is the output position of the vertex at
/// input position `i`. Output is ascending by rank; vertices with equal rank
/// keep their input order. Every rank must be below `ranking.ranks.len()`.
pub fn reverse_counting_sort(ranking: &Ranking) -> Vec<usize> {
    let n = ranking.ranks.len();
    let mut count = vec![0usize; n];

    for &rank in ranking.ranks.iter() {
        count[n - 1 - rank] += 1;
    }

    for i in 1..n {
        count[i] += count[i - 1];
    }

    // Fill from the back of each bucket's reversed slot range so equal keys
    // come out in input order.
    let mut dest = vec![0usize; n];
    for (i, &rank) in ranking.ranks.iter().enumerate() {
        let key = n - 1 - rank;
        dest[i] = n - count[key];
        count[key] -= 1;
    }

    dest
}

/// Moves `items[i]` to `items[dest[i]]` for every `i`, in place.
///
/// `dest` must be a permutation of `0..items.len()`.
pub fn apply_permutation<T>(items: &mut [T], mut dest: Vec<usize>) {
    debug_assert_eq!(items.len(), dest.len());
    for i in 0..items.len() {
        while dest[i] != i {
            let j = dest[i];
            items.swap(i, j);
            dest.swap(i, j);
        }
    }
}

/// Number of vertices whose position changes under `dest`.
pub fn moved_count(dest: &[usize]) -> usize {
    dest.iter().enumerate().filter(|&(i, &d)| i != d).count()
}
