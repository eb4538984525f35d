use std::{fs::File, io::Write, path::Path};

use csv::WriterBuilder;

use crate::errors::{LedgerError, Result};
use crate::ledger::LedgerState;

pub const CSV_HEADER: [&str; 3] = ["Type", "Amount", "Date"];
const TOP_UP_LABEL: &str = "TopUp";
const COFFEE_LABEL: &str = "Coffee";

pub struct ExportService;

impl ExportService {
    /// Writes every top-up, then every purchase, each in entry order.
    pub fn write_csv<W: Write>(state: &LedgerState, writer: W) -> Result<()> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(CSV_HEADER)?;

        for top_up in &state.top_ups {
            writer.write_record([
                TOP_UP_LABEL,
                format!("{:.2}", top_up.amount).as_str(),
                top_up.date.to_string().as_str(),
            ])?;
        }
        for purchase in &state.purchases {
            writer.write_record([
                COFFEE_LABEL,
                format!("{:.2}", purchase.price).as_str(),
                purchase.date.to_string().as_str(),
            ])?;
        }

        writer
            .flush()
            .map_err(|err| LedgerError::Export(err.to_string()))
    }

    /// Exports the history to `destination`. An empty path means the user
    /// backed out of choosing a file.
    pub fn export_csv(state: &LedgerState, destination: &Path) -> Result<()> {
        if destination.as_os_str().is_empty() {
            return Err(LedgerError::Export("export cancelled".into()));
        }
        let file = File::create(destination).map_err(|err| {
            LedgerError::Export(format!("cannot write `{}`: {}", destination.display(), err))
        })?;
        Self::write_csv(state, file)?;
        tracing::info!(
            path = %destination.display(),
            rows = state.top_ups.len() + state.purchases.len(),
            "exported history to CSV"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn top_ups_come_before_purchases() {
        let mut state = LedgerState::new();
        let jan = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let feb = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        state.buy_coffee(jan);
        state.add_top_up("100", feb).unwrap();
        state.add_top_up("12.5", feb).unwrap();

        let mut buf = Vec::new();
        ExportService::write_csv(&state, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8_lossy(&buf),
            "Type,Amount,Date\n\
             TopUp,100.00,2024-02-03\n\
             TopUp,12.50,2024-02-03\n\
             Coffee,5.00,2024-01-10\n"
        );
    }

    #[test]
    fn empty_history_writes_only_header() {
        let mut buf = Vec::new();
        ExportService::write_csv(&LedgerState::new(), &mut buf).unwrap();
        assert_eq!(String::from_utf8_lossy(&buf), "Type,Amount,Date\n");
    }

    #[test]
    fn empty_destination_is_treated_as_cancelled() {
        let err = ExportService::export_csv(&LedgerState::new(), Path::new("")).unwrap_err();
        assert!(matches!(err, LedgerError::Export(_)));
    }
}
