use anyhow::Result;
use serde::Serialize;
use zenspend_core::models::reference::categories_for;
use zenspend_core::models::transaction::{Transaction, TransactionDraft, TransactionType};
use zenspend_core::ZenSpend;

use crate::cli::{TxAddArgs, TxCommand, TxListArgs};
use crate::utils::{maybe_print_json, pretty_table, today};

pub fn handle(app: &mut ZenSpend, cmd: &TxCommand, json: bool) -> Result<()> {
    match cmd {
        TxCommand::Add(args) => add(app, args, json)?,
        TxCommand::List(args) => list(app, args, json)?,
        TxCommand::Rm { id } => {
            let removed = app.delete_transaction(id)?;
            println!(
                "Deleted {} {} ({}) on {}",
                removed.kind,
                app.format_amount(removed.amount),
                removed.category,
                removed.date
            );
        }
        TxCommand::Categories { kind } => {
            let kinds = match kind {
                Some(k) => vec![TransactionType::from(*k)],
                None => vec![TransactionType::Income, TransactionType::Expense],
            };
            let rows: Vec<Vec<String>> = kinds
                .into_iter()
                .flat_map(|k| {
                    categories_for(k)
                        .iter()
                        .map(move |c| vec![k.to_string(), c.to_string()])
                })
                .collect();
            println!("{}", pretty_table(&["Type", "Category"], rows));
        }
    }
    Ok(())
}

fn add(app: &mut ZenSpend, args: &TxAddArgs, json: bool) -> Result<()> {
    let draft = TransactionDraft::new(
        args.kind.into(),
        args.amount,
        args.category.trim(),
        args.description.trim(),
        args.date.unwrap_or_else(today),
    );
    let id = app.add_transaction(draft)?;
    let app = &*app;
    let tx = app.get_transaction(&id).map(|t| TransactionRow::new(t, app));
    if !maybe_print_json(json, &tx)? {
        println!(
            "Recorded {} {} in {} (id: {})",
            args.kind_label(),
            app.format_amount(args.amount),
            args.category,
            id
        );
    }
    Ok(())
}

fn list(app: &ZenSpend, args: &TxListArgs, json: bool) -> Result<()> {
    let data = query_rows(app, args);
    if !maybe_print_json(json, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.display_amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Category", "Description", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub display_amount: String,
}

impl TransactionRow {
    fn new(t: &Transaction, app: &ZenSpend) -> Self {
        Self {
            id: t.id.clone(),
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            category: t.category.clone(),
            description: t.description.clone(),
            amount: t.amount,
            display_amount: app.format_amount(t.amount),
        }
    }
}

/// Transactions matching the list filters, newest first.
pub fn query_rows(app: &ZenSpend, args: &TxListArgs) -> Vec<TransactionRow> {
    let kind = args.kind.map(TransactionType::from);
    let limit = args.limit.unwrap_or(usize::MAX);

    let matching: Vec<&Transaction> = match (kind, args.category.as_deref()) {
        (None, None) => app.transactions().iter().collect(),
        (Some(kind), None) => app.transactions_by_type(kind),
        (None, Some(category)) => app.transactions_in_category(category),
        (Some(kind), Some(category)) => app
            .transactions_in_category(category)
            .into_iter()
            .filter(|t| t.kind == kind)
            .collect(),
    };
    matching
        .into_iter()
        .take(limit)
        .map(|t| TransactionRow::new(t, app))
        .collect()
}

impl TxAddArgs {
    fn kind_label(&self) -> &'static str {
        match TransactionType::from(self.kind) {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}
