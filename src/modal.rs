/// Focus index after a Tab press inside an open dialog with `count`
/// focusable elements. `None` lets the browser move focus normally.
pub fn trapped_focus(count: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let last = count - 1;
    match (current, backwards) {
        (Some(0), true) => Some(last),
        (Some(index), false) if index == last => Some(0),
        _ => None,
    }
}

/// `body` overflow while a dialog is open or closed.
pub fn body_overflow(open: bool) -> &'static str {
    if open {
        "hidden"
    } else {
        "auto"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_wraps_from_last_to_first() {
        assert_eq!(trapped_focus(3, Some(2), false), Some(0));
        assert_eq!(trapped_focus(3, Some(1), false), None);
    }

    #[test]
    fn shift_tab_wraps_from_first_to_last() {
        assert_eq!(trapped_focus(3, Some(0), true), Some(2));
        assert_eq!(trapped_focus(3, Some(2), true), None);
    }

    #[test]
    fn empty_dialog_or_outside_focus_is_left_alone() {
        assert_eq!(trapped_focus(0, None, false), None);
        assert_eq!(trapped_focus(4, None, true), None);
    }

    #[test]
    fn overflow_follows_open_state() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "auto");
    }
}
