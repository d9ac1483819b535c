//! The shipped onboarding catalog.

use atelier_carousel::{CarouselModel, OnboardingItem};

/// Returns the five designer quotes shown during onboarding, in display
/// order. Each image key maps to a backdrop style in the stylesheet.
pub fn default_items() -> Vec<OnboardingItem> {
    vec![
        OnboardingItem::new(
            "Edith Head",
            "You can have anything you want in life if you dress for it",
            Some("men-jacket"),
        ),
        OnboardingItem::new(
            "Diane von Furstenberg",
            "Style is something each of us already has, all we need to do is find it.",
            Some("women-flower"),
        ),
        OnboardingItem::new(
            "Alexander Wang",
            "Anyone can get dressed up and glamorous, but it is how people dress in their days off that are the most intriguing.",
            Some("men-white"),
        ),
        OnboardingItem::new(
            "Vivienne Westwood",
            "Fashion is very important. It is life-enhancing and, like everything that gives pleasure, it is worth doing well.",
            Some("women-white"),
        ),
        OnboardingItem::new(
            "Giorgio Armani",
            "Elegance is not standing out, but being remembered",
            Some("men-yellow"),
        ),
    ]
}

/// Builds the carousel model for the shipped catalog.
pub fn default_model() -> CarouselModel {
    CarouselModel::new(default_items())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_backdrops() {
        let model = default_model();
        assert_eq!(model.count(), 5);

        let titles: Vec<_> = model.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Edith Head",
                "Diane von Furstenberg",
                "Alexander Wang",
                "Vivienne Westwood",
                "Giorgio Armani",
            ]
        );

        // Every page ships with a backdrop key.
        assert!(model.iter().all(|item| item.image.is_some()));
    }
}
