use crate::error::Result;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &S) -> Result<usize> {
    store.count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn counts_live_cards() {
        assert_eq!(run(&StoreFixture::new().store).unwrap(), 0);
        assert_eq!(run(&StoreFixture::new().with_cards(3).store).unwrap(), 3);
    }
}
