//! Exit document bodies.

use jiff::{civil::Date, Timestamp};

use crate::models::{DocumentKind, Employee, ExitDocument, FinalSettlement};

/// Builds the full document set for a settled offboarding.
pub fn exit_documents(
    employee: &Employee,
    settlement: &FinalSettlement,
    exit_date: Date,
    generated_at: Timestamp,
) -> Vec<ExitDocument> {
    vec![
        ExitDocument {
            employee_id: employee.id,
            kind: DocumentKind::FinalSettlement,
            title: format!("Final settlement: {}", employee.name),
            content: final_settlement_body(settlement, exit_date),
            generated_at,
        },
        ExitDocument {
            employee_id: employee.id,
            kind: DocumentKind::ExperienceLetter,
            title: format!("Experience letter: {}", employee.name),
            content: experience_letter_body(employee, exit_date),
            generated_at,
        },
    ]
}

/// Markdown table of the settlement breakdown.
pub fn final_settlement_body(settlement: &FinalSettlement, exit_date: Date) -> String {
    let mut body = format!(
        "# Final Settlement\n\n- Employee: {} (ID: {})\n- Exit date: {exit_date}\n- Years of service: {}\n\n",
        settlement.employee_name, settlement.employee_id, settlement.years_of_service
    );
    body.push_str("| Component | Amount |\n|---|---:|\n");
    let rows = [
        ("Basic salary", settlement.basic_salary),
        ("Gratuity", settlement.gratuity),
        ("Leave encashment", settlement.leave_encashment),
        ("Allowances", settlement.allowances),
        ("Deductions", -settlement.deductions),
    ];
    for (label, amount) in rows {
        body.push_str(&format!("| {label} | {amount:.2} |\n"));
    }
    body.push_str(&format!("| **Total** | **{:.2}** |\n", settlement.total));
    body
}

fn experience_letter_body(employee: &Employee, exit_date: Date) -> String {
    let role = match (&employee.position, &employee.department) {
        (Some(position), Some(department)) => format!(" as {position} in {department}"),
        (Some(position), None) => format!(" as {position}"),
        (None, Some(department)) => format!(" in {department}"),
        (None, None) => String::new(),
    };
    format!(
        "# Experience Letter\n\nThis is to certify that {} was employed with us{role} from {} to {exit_date}.\n\nWe wish them every success in their future endeavours.\n",
        employee.name, employee.hire_date
    )
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::EmployeeStatus;

    #[test]
    fn test_documents_cover_both_kinds() {
        let employee = Employee {
            id: 12,
            name: "Lee Okafor".into(),
            email: None,
            department: Some("Operations".into()),
            position: Some("Analyst".into()),
            monthly_salary: Decimal::from(4000),
            allowances: Decimal::ZERO,
            deductions: Decimal::from(150),
            unused_leave_days: 0,
            hire_date: date(2022, 3, 1),
            status: EmployeeStatus::Offboarding,
            on_payroll: true,
            archived_at: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };
        let settlement = FinalSettlement {
            employee_id: 12,
            employee_name: "Lee Okafor".into(),
            years_of_service: Decimal::new(250, 2),
            basic_salary: Decimal::from(4000),
            gratuity: Decimal::from(7000),
            leave_encashment: Decimal::ZERO,
            allowances: Decimal::ZERO,
            deductions: Decimal::from(150),
            total: Decimal::from(10850),
        };

        let docs = exit_documents(&employee, &settlement, date(2024, 9, 1), Timestamp::now());

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].kind, DocumentKind::FinalSettlement);
        assert!(docs[0].content.contains("| **Total** | **10850.00** |"));
        assert!(docs[0].content.contains("| Deductions | -150.00 |"));
        assert!(docs[1].content.contains("as Analyst in Operations"));
        assert!(docs[1].content.contains("from 2022-03-01 to 2024-09-01"));
    }
}
