use diesel::prelude::*;

use crate::domain::dish::Dish as DomainDish;
use crate::models::dish::Dish as DbDish;
use crate::repository::{DieselRepository, DishReader, RepositoryResult};

impl DishReader for DieselRepository {
    fn list_dishes(&self) -> RepositoryResult<Vec<DomainDish>> {
        use crate::schema::dishes;

        let mut conn = self.conn()?;
        let items = dishes::table
            .order(dishes::id.asc())
            .load::<DbDish>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}
