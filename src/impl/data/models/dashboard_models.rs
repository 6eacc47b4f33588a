use crate::entities::{BreakdownLine, FiscalYear, KpiMonth, MonthlyKpis, Treasury};

use super::{
    accounting_amount_model::AccountingAmountModel, iso_date_model::ISODateModel,
    lenient_string_model::LenientStringModel,
};

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FiscalYearModel {
    id: LenientStringModel,
    start_date: ISODateModel,
    end_date: ISODateModel,
}

impl From<FiscalYearModel> for FiscalYear {
    fn from(m: FiscalYearModel) -> FiscalYear {
        FiscalYear {
            id: m.id.0.unwrap_or_default(),
            start_date: m.start_date.into(),
            end_date: m.end_date.into(),
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BreakdownLineModel {
    code: LenientStringModel,
    #[serde(default)]
    label: LenientStringModel,
    #[serde(default)]
    description: LenientStringModel,
    #[serde(default)]
    amount: AccountingAmountModel,
}

impl From<BreakdownLineModel> for BreakdownLine {
    fn from(m: BreakdownLineModel) -> BreakdownLine {
        BreakdownLine {
            code: m.code.0.unwrap_or_default(),
            label: m.label.0.unwrap_or_default(),
            description: m.description.0.unwrap_or_default(),
            amount: m.amount.0.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TreasuryModel {
    balance: AccountingAmountModel,
    #[serde(default)]
    as_of: Option<ISODateModel>,
}

impl From<TreasuryModel> for Treasury {
    fn from(m: TreasuryModel) -> Treasury {
        Treasury {
            balance: m.balance.0.unwrap_or(0.0),
            as_of: m.as_of.map(Into::into),
        }
    }
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct MonthlyKpisModel {
    revenue: AccountingAmountModel,
    charges: AccountingAmountModel,
    net_result: AccountingAmountModel,
    treasury: AccountingAmountModel,
}

impl MonthlyKpisModel {
    /// The month is not echoed back reliably, so it comes from the request.
    pub(crate) fn into_entity(self, month: KpiMonth) -> MonthlyKpis {
        let revenue = self.revenue.0.unwrap_or(0.0);
        let charges = self.charges.0.unwrap_or(0.0);
        MonthlyKpis {
            month,
            revenue,
            charges,
            net_result: self.net_result.0.unwrap_or(revenue - charges),
            treasury: self.treasury.0.unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    #[test]
    fn fiscal_year_from_json() {
        let m: FiscalYearModel = serde_json::from_value(json!({
            "id": 7, "startDate": "2024-01-01", "endDate": "2024-12-31T23:59:59Z"
        }))
        .unwrap();
        let fy = FiscalYear::from(m);
        assert_eq!(fy.id, "7");
        assert_eq!(fy.end_date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn fiscal_year_without_dates_is_rejected() {
        assert!(serde_json::from_value::<FiscalYearModel>(json!({ "id": "FY24" })).is_err());
    }

    #[test]
    fn breakdown_line_defaults_optional_fields() {
        let m: BreakdownLineModel =
            serde_json::from_value(json!({ "code": "606", "amount": "1 200,50" })).unwrap();
        let line = BreakdownLine::from(m);
        assert_eq!(line.code, "606");
        assert_eq!(line.label, "");
        assert_eq!(line.amount, 1200.5);
    }

    #[test]
    fn kpis_derive_net_result_when_absent() {
        let m: MonthlyKpisModel =
            serde_json::from_value(json!({ "revenue": 10000, "charges": 7500 })).unwrap();
        let kpis = m.into_entity("2024-05".parse().unwrap());
        assert_eq!(kpis.net_result, 2500.0);
        assert_eq!(kpis.treasury, 0.0);
    }
}
