use anyhow::Result;
use serde_json::json;
use zenspend_core::models::reference::FINANCIAL_TIPS;
use zenspend_core::ZenSpend;

use crate::cli::{AskArgs, TipsArgs};
use crate::utils::{maybe_print_json, today};

pub fn ask(app: &ZenSpend, args: &AskArgs, json: bool) -> Result<()> {
    let question = args.question.join(" ");
    let answer = app.ask(&question);
    if !maybe_print_json(json, &json!({ "question": question, "answer": answer }))? {
        println!("{answer}");
    }
    Ok(())
}

pub fn tips(app: &ZenSpend, args: &TipsArgs, json: bool) -> Result<()> {
    if args.all {
        if !maybe_print_json(json, &FINANCIAL_TIPS)? {
            for (i, tip) in FINANCIAL_TIPS.iter().enumerate() {
                println!("{}. {}", i + 1, tip);
            }
        }
        return Ok(());
    }

    let tip = app.tip_of_the_day(today());
    if !maybe_print_json(json, &json!({ "tip": tip }))? {
        println!("Tip of the day: {tip}");
    }
    Ok(())
}
