use super::*;

impl<'a> ReviewRepository for DbReadWrite<'a> {
    fn create_review(&self, review: Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn load_review(&self, id: &str) -> Result<Review> {
        load_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews_of_provider(&self, provider_id: &str) -> Result<Vec<Review>> {
        load_reviews_of_provider(&mut self.conn.borrow_mut(), provider_id)
    }
    fn load_review_of_booking(
        &self,
        booking_id: &str,
        customer_id: &str,
    ) -> Result<Option<Review>> {
        load_review_of_booking(&mut self.conn.borrow_mut(), booking_id, customer_id)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }
    fn delete_review(&self, id: &str) -> Result<()> {
        delete_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviewed_provider_ids(&self) -> Result<Vec<Id>> {
        load_reviewed_provider_ids(&mut self.conn.borrow_mut())
    }
}

impl<'a> ReviewRepository for DbConnection<'a> {
    fn create_review(&self, review: Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn load_review(&self, id: &str) -> Result<Review> {
        load_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews_of_provider(&self, provider_id: &str) -> Result<Vec<Review>> {
        load_reviews_of_provider(&mut self.conn.borrow_mut(), provider_id)
    }
    fn load_review_of_booking(
        &self,
        booking_id: &str,
        customer_id: &str,
    ) -> Result<Option<Review>> {
        load_review_of_booking(&mut self.conn.borrow_mut(), booking_id, customer_id)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }
    fn delete_review(&self, id: &str) -> Result<()> {
        delete_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviewed_provider_ids(&self) -> Result<Vec<Id>> {
        load_reviewed_provider_ids(&mut self.conn.borrow_mut())
    }
}

impl<'a> ReviewRepository for DbReadOnly<'a> {
    fn create_review(&self, _review: Review) -> Result<()> {
        unreachable!();
    }
    fn load_review(&self, id: &str) -> Result<Review> {
        load_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews_of_provider(&self, provider_id: &str) -> Result<Vec<Review>> {
        load_reviews_of_provider(&mut self.conn.borrow_mut(), provider_id)
    }
    fn load_review_of_booking(
        &self,
        booking_id: &str,
        customer_id: &str,
    ) -> Result<Option<Review>> {
        load_review_of_booking(&mut self.conn.borrow_mut(), booking_id, customer_id)
    }
    fn update_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }
    fn delete_review(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn load_reviewed_provider_ids(&self) -> Result<Vec<Id>> {
        load_reviewed_provider_ids(&mut self.conn.borrow_mut())
    }
}

fn create_review(conn: &mut SqliteConnection, review: Review) -> Result<()> {
    let new_review = models::NewReview::from(review);
    let _count = diesel::insert_into(schema::review::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_review(conn: &mut SqliteConnection, id: &str) -> Result<Review> {
    use schema::review::dsl;
    schema::review::table
        .filter(dsl::id.eq(id))
        .first::<models::ReviewRow>(conn)
        .map_err(from_diesel_err)?
        .try_into()
        .map_err(repo::Error::Other)
}

fn load_reviews_of_provider(conn: &mut SqliteConnection, provider_id: &str) -> Result<Vec<Review>> {
    use schema::review::dsl;
    schema::review::table
        .filter(dsl::provider_id.eq(provider_id))
        .order_by(dsl::rowid.asc())
        .load::<models::ReviewRow>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|row| row.try_into().map_err(repo::Error::Other))
        .collect()
}

fn load_review_of_booking(
    conn: &mut SqliteConnection,
    booking_id: &str,
    customer_id: &str,
) -> Result<Option<Review>> {
    use schema::review::dsl;
    schema::review::table
        .filter(dsl::booking_id.eq(booking_id))
        .filter(dsl::customer_id.eq(customer_id))
        .first::<models::ReviewRow>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|row| row.try_into().map_err(repo::Error::Other))
        .transpose()
}

fn update_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    use schema::review::dsl;
    let changeset = models::ReviewChangeset::from(review);
    let count = diesel::update(schema::review::table.filter(dsl::id.eq(review.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_review(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::review::dsl;
    let count = diesel::delete(schema::review::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn load_reviewed_provider_ids(conn: &mut SqliteConnection) -> Result<Vec<Id>> {
    use schema::review::dsl;
    Ok(schema::review::table
        .select(dsl::provider_id)
        .distinct()
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
