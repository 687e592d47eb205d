use super::*;

impl<'a> CustomerRepository for DbReadWrite<'a> {
    fn create_synthetic_customer(&self, customer: SyntheticCustomer) -> Result<()> {
        create_synthetic_customer(&mut self.conn.borrow_mut(), customer)
    }
    fn find_synthetic_customer_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Option<SyntheticCustomer>> {
        find_synthetic_customer_by_first_name(&mut self.conn.borrow_mut(), first_name)
    }
}

impl<'a> CustomerRepository for DbConnection<'a> {
    fn create_synthetic_customer(&self, customer: SyntheticCustomer) -> Result<()> {
        create_synthetic_customer(&mut self.conn.borrow_mut(), customer)
    }
    fn find_synthetic_customer_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Option<SyntheticCustomer>> {
        find_synthetic_customer_by_first_name(&mut self.conn.borrow_mut(), first_name)
    }
}

impl<'a> CustomerRepository for DbReadOnly<'a> {
    fn create_synthetic_customer(&self, _customer: SyntheticCustomer) -> Result<()> {
        unreachable!();
    }
    fn find_synthetic_customer_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Option<SyntheticCustomer>> {
        find_synthetic_customer_by_first_name(&mut self.conn.borrow_mut(), first_name)
    }
}

fn create_synthetic_customer(
    conn: &mut SqliteConnection,
    customer: SyntheticCustomer,
) -> Result<()> {
    let new_customer = models::NewSyntheticCustomer::from(customer);
    let _count = diesel::insert_into(schema::synthetic_customer::table)
        .values(&new_customer)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn find_synthetic_customer_by_first_name(
    conn: &mut SqliteConnection,
    first_name: &str,
) -> Result<Option<SyntheticCustomer>> {
    use schema::synthetic_customer::dsl;
    // The oldest matching placeholder wins to keep the mapping stable.
    Ok(schema::synthetic_customer::table
        .filter(dsl::marker.eq(SYNTHETIC_MARKER))
        .filter(dsl::first_name.eq(first_name))
        .order_by(dsl::rowid.asc())
        .first::<models::SyntheticCustomerRow>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
