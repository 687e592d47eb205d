use super::*;

impl<'a> RatingSummaryRepository for DbReadWrite<'a> {
    fn replace_rating_summary(&self, summary: RatingSummary) -> Result<()> {
        replace_rating_summary(&mut self.conn.borrow_mut(), summary)
    }
    fn load_rating_summary(&self, provider_id: &str) -> Result<Option<RatingSummary>> {
        load_rating_summary(&mut self.conn.borrow_mut(), provider_id)
    }
    fn load_summarized_provider_ids(&self) -> Result<Vec<Id>> {
        load_summarized_provider_ids(&mut self.conn.borrow_mut())
    }
}

impl<'a> RatingSummaryRepository for DbConnection<'a> {
    fn replace_rating_summary(&self, summary: RatingSummary) -> Result<()> {
        replace_rating_summary(&mut self.conn.borrow_mut(), summary)
    }
    fn load_rating_summary(&self, provider_id: &str) -> Result<Option<RatingSummary>> {
        load_rating_summary(&mut self.conn.borrow_mut(), provider_id)
    }
    fn load_summarized_provider_ids(&self) -> Result<Vec<Id>> {
        load_summarized_provider_ids(&mut self.conn.borrow_mut())
    }
}

impl<'a> RatingSummaryRepository for DbReadOnly<'a> {
    fn replace_rating_summary(&self, _summary: RatingSummary) -> Result<()> {
        unreachable!();
    }
    fn load_rating_summary(&self, provider_id: &str) -> Result<Option<RatingSummary>> {
        load_rating_summary(&mut self.conn.borrow_mut(), provider_id)
    }
    fn load_summarized_provider_ids(&self) -> Result<Vec<Id>> {
        load_summarized_provider_ids(&mut self.conn.borrow_mut())
    }
}

fn replace_rating_summary(conn: &mut SqliteConnection, summary: RatingSummary) -> Result<()> {
    let new_summary = models::NewRatingSummary::from_summary(summary, Timestamp::now());
    // Replace the whole row; the summary is never patched incrementally.
    let _count = diesel::replace_into(schema::rating_summary::table)
        .values(&new_summary)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_rating_summary(
    conn: &mut SqliteConnection,
    provider_id: &str,
) -> Result<Option<RatingSummary>> {
    use schema::rating_summary::dsl;
    schema::rating_summary::table
        .filter(dsl::provider_id.eq(provider_id))
        .first::<models::RatingSummaryRow>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|row| row.try_into().map_err(repo::Error::Other))
        .transpose()
}

fn load_summarized_provider_ids(conn: &mut SqliteConnection) -> Result<Vec<Id>> {
    use schema::rating_summary::dsl;
    Ok(schema::rating_summary::table
        .select(dsl::provider_id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
