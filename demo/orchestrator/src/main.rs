// Demo Orchestrator - Walks scripted payments through the risk decision gate
// Shows how provider scores map to APPROVE / REVIEW / REJECT outcomes

use colored::Colorize;
use risk_policy::{Decision, PayerId, RiskPolicy, StubScoreProvider};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone)]
pub struct DemoPayment {
    pub payment_id: String,
    pub payer: PayerId,
    pub payee: String,
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Default)]
pub struct DemoTally {
    pub created: u64,
    pub pending_review: u64,
    pub declined: u64,
    pub approved_volume: Decimal,
}

pub struct DemoOrchestrator {
    policy: RiskPolicy<StubScoreProvider>,
    tally: DemoTally,
}

impl DemoOrchestrator {
    pub fn new() -> Self {
        Self {
            policy: RiskPolicy::new(StubScoreProvider::new()),
            tally: DemoTally::default(),
        }
    }

    /// Run the scripted checkout scenario
    pub fn run_checkout_demo(&mut self) {
        println!("\n🚀 =================================================================");
        println!("🚀 PayRisk - Payment Risk Gate Demo");
        println!("🚀 Demonstrating: Score-Based APPROVE / REVIEW / REJECT Decisions");
        println!("🚀 =================================================================\n");

        let payments = scripted_payments();

        println!(
            "📊 Scenario: Card-not-present checkout, {} payments",
            payments.len()
        );
        println!(
            "📊 Thresholds: approve at {}+, review at {}+, reject below",
            risk_policy::APPROVE_THRESHOLD,
            risk_policy::REVIEW_THRESHOLD
        );
        println!("📊 Scoring: deterministic stub provider (same payer + amount, same score)");
        println!();

        for (idx, payment) in payments.iter().enumerate() {
            println!(
                "💳 Payment {}/{} [{}]: {} → {} ({} {})",
                idx + 1,
                payments.len(),
                payment.payment_id,
                payment.payer,
                payment.payee,
                payment.amount,
                payment.currency
            );

            self.process_payment(payment);
        }

        self.show_summary();
    }

    fn process_payment(&mut self, payment: &DemoPayment) {
        match self.policy.decide(&payment.payer, payment.amount) {
            Ok((score, decision)) => {
                println!(
                    "  ✅ score {:>3} → {} → payment {}\n",
                    score.value(),
                    colored_decision(decision),
                    payment_status(decision)
                );

                match decision {
                    Decision::Approve => {
                        self.tally.created += 1;
                        self.tally.approved_volume += payment.amount;
                    }
                    Decision::Review => self.tally.pending_review += 1,
                    Decision::Reject => self.tally.declined += 1,
                }
            }
            Err(e) => {
                println!("  ❌ scoring failed, no decision made: {e}\n");
            }
        }
    }

    fn show_summary(&self) {
        println!("📈 =================================================================");
        println!("📈 DECISION SUMMARY");
        println!("📈 =================================================================\n");

        println!("  ✅ Created:         {}", self.tally.created);
        println!("  🔍 Pending review:  {}", self.tally.pending_review);
        println!("  ⛔ Declined:        {}", self.tally.declined);
        println!("  💰 Approved volume: {} CAD", self.tally.approved_volume);
        println!();
        println!("🎉 Demo complete. Re-run it: every payment scores the same again.\n");
    }
}

/// Gateway payment status assigned for each decision
fn payment_status(decision: Decision) -> &'static str {
    match decision {
        Decision::Approve => "CREATED",
        Decision::Review => "PENDING_REVIEW",
        Decision::Reject => "DECLINED",
    }
}

fn colored_decision(decision: Decision) -> colored::ColoredString {
    match decision {
        Decision::Approve => decision.as_str().green().bold(),
        Decision::Review => decision.as_str().yellow().bold(),
        Decision::Reject => decision.as_str().red().bold(),
    }
}

fn scripted_payments() -> Vec<DemoPayment> {
    vec![
        DemoPayment {
            payment_id: "PAY-001".to_string(),
            payer: PayerId::new("CUST123"),
            payee: "Maple Outfitters".to_string(),
            amount: dec!(100.50),
            currency: "CAD".to_string(),
        },
        DemoPayment {
            payment_id: "PAY-002".to_string(),
            payer: PayerId::new("CUST456"),
            payee: "Northern Electronics".to_string(),
            amount: dec!(1250.00),
            currency: "CAD".to_string(),
        },
        DemoPayment {
            payment_id: "PAY-003".to_string(),
            payer: PayerId::new("CUST789"),
            payee: "Lakeside Books".to_string(),
            amount: dec!(42.99),
            currency: "CAD".to_string(),
        },
        DemoPayment {
            payment_id: "PAY-004".to_string(),
            payer: PayerId::new("CUST901"),
            payee: "Harbour Grocers".to_string(),
            amount: dec!(310.75),
            currency: "CAD".to_string(),
        },
        DemoPayment {
            payment_id: "PAY-005".to_string(),
            payer: PayerId::new("CUST234"),
            payee: "Prairie Hardware".to_string(),
            amount: dec!(8999.00),
            currency: "CAD".to_string(),
        },
        DemoPayment {
            payment_id: "PAY-006".to_string(),
            payer: PayerId::new("CUST567"),
            payee: "Summit Travel".to_string(),
            amount: dec!(2450.25),
            currency: "CAD".to_string(),
        },
        DemoPayment {
            payment_id: "PAY-007".to_string(),
            payer: PayerId::new("CUST123"),
            payee: "Maple Outfitters".to_string(),
            amount: dec!(100.50),
            currency: "CAD".to_string(),
        },
        DemoPayment {
            payment_id: "PAY-008".to_string(),
            payer: PayerId::new("CUST890"),
            payee: "Coastal Cafe".to_string(),
            amount: dec!(15.00),
            currency: "CAD".to_string(),
        },
    ]
}

fn main() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .init();

    println!("🏁 Starting PayRisk demo orchestrator...");

    let mut orchestrator = DemoOrchestrator::new();
    orchestrator.run_checkout_demo();
}
