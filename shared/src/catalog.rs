//! # Mock Catalog
//!
//! Hard-coded content for every screen. There is no backend; these functions are the
//! single source of restaurants, meals, NGOs, notifications and profile history.

use crate::dto::{
    Achievement, Category, CommunityGoal, DonationOption, FeaturedRestaurant, MealDetail,
    MenuItem, Ngo, Notification, NotificationKind, Nutrition, OnboardingPage,
    OrderHistoryEntry, Restaurant, TrackingStep,
};

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    name: &str,
    restaurant: &str,
    original_price: u32,
    discounted_price: u32,
    quantity: u32,
    expiry_minutes: u32,
    image: &str,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        restaurant: restaurant.to_string(),
        image: image.to_string(),
        original_price,
        discounted_price,
        quantity,
        expiry_minutes,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Restaurants currently listing surplus food
pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: 1,
            name: "Green Bistro".to_string(),
            image: "🥗".to_string(),
            rating: 4.5,
            category: "Healthy".to_string(),
            distance_km: 0.5,
            delivery_time: "15-20 mins".to_string(),
            surplus: vec![
                item(1, "Mediterranean Bowl", "Green Bistro", 299, 149, 3, 120, "🥙"),
                item(2, "Quinoa Salad", "Green Bistro", 249, 124, 5, 180, "🥗"),
            ],
        },
        Restaurant {
            id: 2,
            name: "Spice Garden".to_string(),
            image: "🍛".to_string(),
            rating: 4.3,
            category: "Indian".to_string(),
            distance_km: 1.2,
            delivery_time: "20-25 mins".to_string(),
            surplus: vec![
                item(3, "Butter Chicken", "Spice Garden", 349, 209, 2, 60, "🍗"),
                item(4, "Biryani", "Spice Garden", 399, 199, 4, 120, "🍛"),
            ],
        },
        Restaurant {
            id: 3,
            name: "Pizza Corner".to_string(),
            image: "🍕".to_string(),
            rating: 4.7,
            category: "Italian".to_string(),
            distance_km: 0.8,
            delivery_time: "18-22 mins".to_string(),
            surplus: vec![item(5, "Margherita Pizza", "Pizza Corner", 299, 119, 2, 90, "🍕")],
        },
    ]
}

pub fn restaurant(id: u32) -> Option<Restaurant> {
    restaurants().into_iter().find(|r| r.id == id)
}

/// Look up a surplus item by its identifier across all restaurants
pub fn menu_item(id: u32) -> Option<MenuItem> {
    restaurants()
        .into_iter()
        .flat_map(|r| r.surplus)
        .find(|item| item.id == id)
}

/// Detail record for a surplus item.
///
/// The Mediterranean Bowl carries the full hand-written record; other items get a
/// detail page assembled from their listing and restaurant.
pub fn meal_detail(item_id: u32) -> Option<MealDetail> {
    let owner = restaurants()
        .into_iter()
        .find(|r| r.surplus.iter().any(|i| i.id == item_id))?;
    let item = owner.surplus.iter().find(|i| i.id == item_id)?.clone();

    if item_id == 1 {
        return Some(MealDetail {
            item,
            rating: 4.5,
            reviews: 128,
            description: "Fresh Mediterranean bowl with quinoa, grilled vegetables, feta cheese, olives, and tahini dressing. Made with organic ingredients and packed with nutrients.".to_string(),
            ingredients: strings(&[
                "Quinoa",
                "Grilled Vegetables",
                "Feta Cheese",
                "Cherry Tomatoes",
                "Olives",
                "Tahini Dressing",
            ]),
            nutrition: Some(Nutrition {
                calories: 420,
                protein: "18g".to_string(),
                carbs: "45g".to_string(),
                fat: "22g".to_string(),
            }),
            dietary_info: strings(&["Vegetarian", "Gluten-Free Option"]),
            pickup_time: "15-20 mins".to_string(),
            distance: "0.5 km".to_string(),
        });
    }

    Some(MealDetail {
        description: format!(
            "Freshly prepared {} from {}, rescued from today's surplus.",
            item.name, owner.name
        ),
        item,
        rating: owner.rating,
        reviews: 0,
        ingredients: Vec::new(),
        nutrition: None,
        dietary_info: Vec::new(),
        pickup_time: owner.delivery_time.clone(),
        distance: owner.distance_label(),
    })
}

pub fn onboarding_pages() -> Vec<OnboardingPage> {
    vec![
        OnboardingPage {
            title: "Save Food".to_string(),
            description: "Restaurants share their surplus food with our community, reducing waste and helping the environment.".to_string(),
            image: "onboarding-save-food.png".to_string(),
        },
        OnboardingPage {
            title: "Affordable Meals".to_string(),
            description: "Get delicious, quality meals at discounted prices while supporting sustainability initiatives.".to_string(),
            image: "onboarding-affordable-meals.png".to_string(),
        },
        OnboardingPage {
            title: "Feed the Hungry".to_string(),
            description: "Every order helps donate meals to NGOs and communities in need. Make an impact with every bite.".to_string(),
            image: "onboarding-feed-hungry.png".to_string(),
        },
    ]
}

pub fn categories() -> Vec<Category> {
    [("Meals", "🍽️"), ("Snacks", "☕"), ("Beverages", "🍷"), ("Donations", "❤️")]
        .iter()
        .map(|(name, icon)| Category {
            name: name.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

pub fn featured_restaurants() -> Vec<FeaturedRestaurant> {
    let featured = |id: u32, name: &str, image: &str, rating: f32, category: &str, surplus_items: u32, distance: &str, discount: &str, estimated_savings: u32| {
        FeaturedRestaurant {
            id,
            name: name.to_string(),
            image: image.to_string(),
            rating,
            category: category.to_string(),
            surplus_items,
            distance: distance.to_string(),
            discount: discount.to_string(),
            estimated_savings,
        }
    };
    vec![
        featured(1, "Green Bistro", "🥗", 4.5, "Healthy", 8, "0.5 km", "50%", 150),
        featured(2, "Spice Garden", "🍛", 4.3, "Indian", 12, "1.2 km", "40%", 200),
        featured(3, "Pizza Corner", "🍕", 4.7, "Italian", 6, "0.8 km", "60%", 180),
    ]
}

pub fn ngos() -> Vec<Ngo> {
    vec![
        Ngo {
            id: 1,
            name: "Akshaya Patra Foundation".to_string(),
            image: "🍽️".to_string(),
            description: "Providing unlimited food for education. We serve nutritious meals to over 1.8 million children.".to_string(),
            location: "Bangalore".to_string(),
            meals_served: "1.8M+".to_string(),
            rating: 4.9,
            verified: true,
        },
        Ngo {
            id: 2,
            name: "Feeding India".to_string(),
            image: "🤝".to_string(),
            description: "Fighting hunger and food wastage. We redistribute surplus food to feed the underprivileged.".to_string(),
            location: "Pan India".to_string(),
            meals_served: "100M+".to_string(),
            rating: 4.8,
            verified: true,
        },
        Ngo {
            id: 3,
            name: "Robin Hood Army".to_string(),
            image: "🏹".to_string(),
            description: "We are a volunteer based organisation that works to get surplus food from restaurants to the less fortunate.".to_string(),
            location: "Multiple Cities".to_string(),
            meals_served: "50M+".to_string(),
            rating: 4.7,
            verified: true,
        },
    ]
}

pub fn donation_options() -> Vec<DonationOption> {
    [
        (50, 2, "Feed 2 children for a day"),
        (100, 4, "Provide lunch for a family"),
        (250, 10, "Support 10 people with nutritious meals"),
        (500, 20, "Feed an entire community group"),
    ]
    .iter()
    .map(|(amount, meals, description)| DonationOption {
        amount: *amount,
        meals: *meals,
        description: description.to_string(),
    })
    .collect()
}

pub fn community_goal() -> CommunityGoal {
    CommunityGoal {
        meals_goal: 20_000,
        progress_percent: 78,
    }
}

pub fn notifications() -> Vec<Notification> {
    let note = |id: u32, kind: NotificationKind, title: &str, message: &str, minutes_ago: u32, read: bool| {
        Notification {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            minutes_ago,
            read,
        }
    };
    vec![
        note(1, NotificationKind::Order, "Order Delivered Successfully! 🎉", "Your Mediterranean Bowl from Green Bistro has been delivered. You saved ₹150 and helped reduce food waste!", 2, false),
        note(2, NotificationKind::Impact, "Amazing! You've saved 10kg of food! 🌱", "Your sustainable choices this month prevented 10kg of food from going to waste. Keep up the great work!", 60, false),
        note(3, NotificationKind::Offer, "50% OFF at Pizza Corner! 🍕", "Surplus pizza available now at Pizza Corner. Limited quantity - order before it's gone!", 120, true),
        note(4, NotificationKind::Donation, "Your donation helped feed 5 people ❤️", "Thanks to your ₹100 donation, 5 people received nutritious meals through Akshaya Patra Foundation.", 300, true),
        note(5, NotificationKind::Alert, "Surplus Food Alert Near You! ⏰", "3 restaurants within 1km have surplus food available. Order now and save money while helping the environment!", 1440, true),
        note(6, NotificationKind::Achievement, "New Badge Unlocked: Eco Warrior! 🏆", "Congratulations! You've earned the Eco Warrior badge for saving over 5kg of food. Share your achievement!", 2 * 1440, true),
        note(7, NotificationKind::Reminder, "Weekly Impact Report Available 📊", "Your weekly sustainability report is ready! You've saved ₹500 and helped feed 12 people this week.", 3 * 1440, true),
    ]
}

pub fn order_history() -> Vec<OrderHistoryEntry> {
    let order = |id: &str, restaurant: &str, items: &[&str], date: &str, amount: u32, rating: u8| {
        OrderHistoryEntry {
            id: id.to_string(),
            restaurant: restaurant.to_string(),
            items: strings(items),
            date: date.to_string(),
            amount,
            status: "Delivered".to_string(),
            rating,
        }
    };
    vec![
        order("FF123456", "Green Bistro", &["Mediterranean Bowl", "Quinoa Salad"], "Today, 2:30 PM", 273, 5),
        order("FF123455", "Spice Garden", &["Butter Chicken", "Naan"], "Yesterday, 7:45 PM", 209, 4),
        order("FF123454", "Pizza Corner", &["Margherita Pizza"], "2 days ago, 8:20 PM", 119, 5),
    ]
}

pub fn achievements() -> Vec<Achievement> {
    [
        (1, "Eco Warrior", "Saved 5kg of food", "🌿", true),
        (2, "Kind Heart", "Donated 10 meals", "💚", true),
        (3, "Food Savior", "Prevented 100 meals from waste", "🍽️", true),
        (4, "Community Champion", "Referred 5 friends", "🏆", false),
        (5, "Sustainability Star", "Used app for 30 days", "⭐", false),
    ]
    .iter()
    .map(|(id, title, description, icon, earned)| Achievement {
        id: *id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        earned: *earned,
    })
    .collect()
}

pub fn tracking_steps() -> Vec<TrackingStep> {
    [
        (1, "Order Confirmed", "Your order has been confirmed"),
        (2, "Being Prepared", "Restaurant is preparing your food"),
        (3, "Out for Delivery", "Driver is on the way"),
        (4, "Delivered", "Order delivered successfully"),
    ]
    .iter()
    .map(|(id, title, description)| TrackingStep {
        id: *id,
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_menu_item_ids_are_unique() {
        let ids: Vec<u32> = restaurants()
            .into_iter()
            .flat_map(|r| r.surplus)
            .map(|i| i.id)
            .collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_menu_item_lookup() {
        let biryani = menu_item(4).unwrap();
        assert_eq!(biryani.name, "Biryani");
        assert_eq!(biryani.restaurant, "Spice Garden");
        assert!(menu_item(99).is_none());
    }

    #[test]
    fn test_meal_detail_for_signature_bowl() {
        let detail = meal_detail(1).unwrap();
        assert_eq!(detail.item.name, "Mediterranean Bowl");
        assert_eq!(detail.item.discounted_price, 149);
        assert_eq!(detail.reviews, 128);
        assert_eq!(detail.ingredients.len(), 6);
        assert_eq!(detail.nutrition.as_ref().map(|n| n.calories), Some(420));
    }

    #[test]
    fn test_meal_detail_derived_from_listing() {
        let detail = meal_detail(5).unwrap();
        assert_eq!(detail.item.name, "Margherita Pizza");
        assert_eq!(detail.distance, "0.8 km");
        assert_eq!(detail.pickup_time, "18-22 mins");
        assert!(meal_detail(42).is_none());
    }

    #[test]
    fn test_unread_notifications() {
        let unread = notifications().iter().filter(|n| !n.read).count();
        assert_eq!(unread, 2);
    }

    #[test]
    fn test_tracking_steps_are_ordered() {
        let steps = tracking_steps();
        assert_eq!(steps.len(), 4);
        assert!(steps.windows(2).all(|w| w[0].id + 1 == w[1].id));
        assert_eq!(steps[3].title, "Delivered");
    }

    #[test]
    fn test_community_goal_remaining() {
        assert_eq!(community_goal().meals_remaining(), 4_400);
    }
}
