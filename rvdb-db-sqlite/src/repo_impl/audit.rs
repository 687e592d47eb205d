use super::*;

impl<'a> AuditLogRepository for DbReadWrite<'a> {
    fn append_audit_entry(&self, entry: AuditEntry) -> Result<()> {
        append_audit_entry(&mut self.conn.borrow_mut(), entry)
    }
    fn load_audit_entries_of_review(&self, review_id: &str) -> Result<Vec<AuditEntry>> {
        load_audit_entries_of_review(&mut self.conn.borrow_mut(), review_id)
    }
}

impl<'a> AuditLogRepository for DbConnection<'a> {
    fn append_audit_entry(&self, entry: AuditEntry) -> Result<()> {
        append_audit_entry(&mut self.conn.borrow_mut(), entry)
    }
    fn load_audit_entries_of_review(&self, review_id: &str) -> Result<Vec<AuditEntry>> {
        load_audit_entries_of_review(&mut self.conn.borrow_mut(), review_id)
    }
}

impl<'a> AuditLogRepository for DbReadOnly<'a> {
    fn append_audit_entry(&self, _entry: AuditEntry) -> Result<()> {
        unreachable!();
    }
    fn load_audit_entries_of_review(&self, review_id: &str) -> Result<Vec<AuditEntry>> {
        load_audit_entries_of_review(&mut self.conn.borrow_mut(), review_id)
    }
}

fn append_audit_entry(conn: &mut SqliteConnection, entry: AuditEntry) -> Result<()> {
    let new_entry = models::NewAuditEntry::try_from(entry).map_err(repo::Error::Other)?;
    let _count = diesel::insert_into(schema::audit_log::table)
        .values(&new_entry)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_audit_entries_of_review(
    conn: &mut SqliteConnection,
    review_id: &str,
) -> Result<Vec<AuditEntry>> {
    use schema::audit_log::dsl;
    schema::audit_log::table
        .filter(dsl::review_id.eq(review_id))
        .order_by(dsl::rowid.asc())
        .load::<models::AuditEntryRow>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|row| row.try_into().map_err(repo::Error::Other))
        .collect()
}
