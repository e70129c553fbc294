use diesel::prelude::*;

use crate::domain::dish::Dish as DomainDish;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::dishes)]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub price_cents: i32,
}

impl From<Dish> for DomainDish {
    fn from(value: Dish) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price_cents: value.price_cents,
        }
    }
}
