/// FAQ accordion: at most one question is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[cfg(test)]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Clicking the open question closes it; any other click opens that one
    /// and closes the rest.
    pub fn toggle(self, index: usize) -> Self {
        Self {
            open: if self.is_open(index) { None } else { Some(index) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_others() {
        let accordion = Accordion::default().toggle(0).toggle(2);

        assert_eq!(accordion.is_open(0), false);
        assert_eq!(accordion.is_open(2), true);
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let accordion = Accordion::default().toggle(1).toggle(1);
        assert_eq!(accordion.open_index(), None);
    }
}
