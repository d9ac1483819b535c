//! The ordered list of onboarding items.

use crate::error::CarouselError;

/// A single onboarding page: an attributed quote over a backdrop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingItem {
    /// Attribution line shown above the quote.
    pub title: String,
    /// The quote itself.
    pub detail: String,
    /// Opaque backdrop asset key, resolved by the presentation layer.
    /// Items without a backdrop fall back to the base background.
    pub image: Option<String>,
}

impl OnboardingItem {
    /// Creates a new onboarding item.
    pub fn new(
        title: impl Into<String>,
        detail: impl Into<String>,
        image: Option<impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            image: image.map(Into::into),
        }
    }
}

/// The onboarding carousel: a fixed, ordered list of items.
///
/// Constructed once at startup and never mutated; insertion order is
/// display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselModel {
    items: Vec<OnboardingItem>,
}

impl CarouselModel {
    /// Creates a model from the given items.
    pub fn new(items: Vec<OnboardingItem>) -> Self {
        Self { items }
    }

    /// Returns the number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the item at `index`, or `IndexOutOfRange` outside
    /// `[0, count())`.
    pub fn item_at(&self, index: usize) -> Result<&OnboardingItem, CarouselError> {
        self.items.get(index).ok_or(CarouselError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Iterates the items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &OnboardingItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> CarouselModel {
        CarouselModel::new(vec![
            OnboardingItem::new("First", "first detail", Some("backdrop-one")),
            OnboardingItem::new("Second", "second detail", None::<String>),
            OnboardingItem::new("Third", "third detail", Some("backdrop-three")),
        ])
    }

    #[test]
    fn test_count_and_order() {
        let model = sample_model();
        assert_eq!(model.count(), 3);

        let titles: Vec<_> = model.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_item_at_in_range() {
        let model = sample_model();

        let item = model.item_at(1).unwrap();
        assert_eq!(item.title, "Second");
        assert_eq!(item.detail, "second detail");
        assert!(item.image.is_none());

        let item = model.item_at(2).unwrap();
        assert_eq!(item.image.as_deref(), Some("backdrop-three"));
    }

    #[test]
    fn test_item_at_out_of_range() {
        let model = sample_model();

        assert_eq!(
            model.item_at(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            model.item_at(usize::MAX),
            Err(CarouselError::IndexOutOfRange {
                index: usize::MAX,
                len: 3
            })
        );
    }
}
