/// Returns the neighbour of `current` in `order`, wrapping at either end.
///
/// An unknown `current` starts from the first entry. `order` must not be empty.
pub fn cycle<T: Copy + PartialEq>(order: &[T], current: T, forward: bool) -> T {
    let len = order.len();
    let idx = order.iter().position(|f| *f == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    order[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let order = [1, 2, 3];
        assert_eq!(cycle(&order, 3, true), 1);
        assert_eq!(cycle(&order, 1, false), 3);
        assert_eq!(cycle(&order, 2, true), 3);
    }
}
