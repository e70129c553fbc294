use serde::Serialize;

use crate::domain::dish::Dish;
use crate::repository::DishReader;
use crate::services::{ServiceError, ServiceResult};

/// Display card rendered for each dish in the menu section.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DishCard {
    pub id: i32,
    pub name: String,
    /// Price formatted for display, e.g. `$12.50`.
    pub price: String,
}

/// Entry of the dish selector on the order form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DishOption {
    /// Dish identifier submitted with the form.
    pub value: i32,
    /// Dish name shown to the user.
    pub label: String,
}

/// Data required to render the menu section and the dish selector.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuPageData {
    pub cards: Vec<DishCard>,
    pub options: Vec<DishOption>,
}

impl From<Vec<Dish>> for MenuPageData {
    fn from(dishes: Vec<Dish>) -> Self {
        let mut data = Self {
            cards: Vec::with_capacity(dishes.len()),
            options: Vec::with_capacity(dishes.len()),
        };

        for dish in dishes {
            data.cards.push(DishCard {
                id: dish.id,
                price: dish.formatted_price(),
                name: dish.name.clone(),
            });
            data.options.push(DishOption {
                value: dish.id,
                label: dish.name,
            });
        }

        data
    }
}

/// Returns every dish on the menu, ordered by identifier.
pub fn list_dishes<R>(repo: &R) -> ServiceResult<Vec<Dish>>
where
    R: DishReader + ?Sized,
{
    repo.list_dishes().map_err(ServiceError::from)
}

/// Loads the menu cards and the dish selector options.
pub fn load_menu<R>(repo: &R) -> ServiceResult<MenuPageData>
where
    R: DishReader + ?Sized,
{
    Ok(list_dishes(repo)?.into())
}
