//! Restaurant listing search and filter chips

use shared::Restaurant;

const NEARBY_KM: f32 = 1.0;
const EXPIRING_SOON_MINUTES: u32 = 90;
const HIGH_DISCOUNT_PERCENT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestaurantFilter {
    #[default]
    All,
    /// Within 1 km
    Nearby,
    /// Some item expires within 90 minutes
    ExpiringSoon,
    /// Some item is at least 50% off
    HighDiscount,
}

impl RestaurantFilter {
    pub fn all() -> &'static [RestaurantFilter] {
        &[
            RestaurantFilter::All,
            RestaurantFilter::Nearby,
            RestaurantFilter::ExpiringSoon,
            RestaurantFilter::HighDiscount,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RestaurantFilter::All => "All",
            RestaurantFilter::Nearby => "Nearby",
            RestaurantFilter::ExpiringSoon => "Expiring Soon",
            RestaurantFilter::HighDiscount => "High Discount",
        }
    }

    pub fn accepts(&self, restaurant: &Restaurant) -> bool {
        match self {
            RestaurantFilter::All => true,
            RestaurantFilter::Nearby => restaurant.distance_km <= NEARBY_KM,
            RestaurantFilter::ExpiringSoon => restaurant
                .soonest_expiry_minutes()
                .is_some_and(|minutes| minutes <= EXPIRING_SOON_MINUTES),
            RestaurantFilter::HighDiscount => restaurant.best_discount() >= HIGH_DISCOUNT_PERCENT,
        }
    }
}

/// Search text plus the active filter chip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantQuery {
    pub search: String,
    pub filter: RestaurantFilter,
}

impl RestaurantQuery {
    /// Case-insensitive match on restaurant name, category or any item name
    pub fn matches_search(&self, restaurant: &Restaurant) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        restaurant.name.to_lowercase().contains(&needle)
            || restaurant.category.to_lowercase().contains(&needle)
            || restaurant
                .surplus
                .iter()
                .any(|item| item.name.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.filter.accepts(restaurant) && self.matches_search(restaurant)
    }

    /// Restaurants passing the query, catalog order preserved
    pub fn apply<'a>(&self, restaurants: &'a [Restaurant]) -> Vec<&'a Restaurant> {
        restaurants.iter().filter(|r| self.matches(r)).collect()
    }
}
