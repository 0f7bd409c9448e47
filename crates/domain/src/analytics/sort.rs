// domain analytics sorting utilities

/// Stable ascending insertion sort. Returns a sorted copy; `values` is left untouched.
///
/// Quadratic in the worst case, which is fine for the list sizes these reports handle.
pub fn insertion_sort<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();

    for i in 1..sorted.len() {
        let key = sorted[i].clone();
        let mut j = i;
        // strict `>` keeps equal elements in input order
        while j > 0 && sorted[j - 1] > key {
            sorted[j] = sorted[j - 1].clone();
            j -= 1;
        }
        sorted[j] = key;
    }

    sorted
}
