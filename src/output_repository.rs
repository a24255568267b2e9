use crate::config::AssetConfig;
use crate::display::format_token;
use crate::domain::{ProfileBalance, StakingRequest, ValidationVerdict, VerdictOutput};

/// Collects the balance summary and verdict rows, printed as CSV on flush.
#[derive(Debug)]
pub struct StdOutOutput {
    config: AssetConfig,
    balances: Vec<(&'static str, String)>,
    verdicts: Vec<String>,
}

impl StdOutOutput {
    pub fn new(config: AssetConfig) -> Self {
        Self {
            config,
            balances: Vec::new(),
            verdicts: Vec::new(),
        }
    }

    fn render(&self) -> String {
        let mut out = String::from("balance,amount\n");
        for (name, amount) in &self.balances {
            out.push_str(&format!("{},{}\n", name, amount));
        }
        out.push_str("action,validator,amount,parsed,format_valid,sufficient,allowed\n");
        for row in &self.verdicts {
            out.push_str(row);
            out.push('\n');
        }
        out
    }
}

impl VerdictOutput for StdOutOutput {
    fn report_profile(&mut self, profile: &ProfileBalance) {
        let display = |amount| {
            format_token(amount, self.config.decimals, self.config.display_frac_digits)
        };
        let wallet = &profile.wallet_balance;

        self.balances = vec![
            ("wallet_balance", display(wallet.wallet_balance)),
            ("reserved_for_storage", display(wallet.reserved_for_storage)),
            ("in_staking_pools", display(wallet.in_staking_pools.sum)),
            ("staked", display(wallet.in_staking_pools.staked)),
            ("pending_release", display(wallet.in_staking_pools.pending_release)),
            (
                "available_for_withdraw",
                display(wallet.in_staking_pools.available_for_withdraw),
            ),
            ("available", display(wallet.available)),
        ];

        if let Some(lockup) = &profile.lockup_balance {
            self.balances.extend([
                ("lockup_balance", display(lockup.lockup_balance)),
                ("lockup_reserved_for_storage", display(lockup.reserved_for_storage)),
                ("lockup_in_staking_pools", display(lockup.in_staking_pools.sum)),
                ("lockup_locked", display(lockup.locked)),
                ("lockup_unlocked", display(lockup.unlocked.sum)),
                (
                    "lockup_available_to_transfer",
                    display(lockup.unlocked.available_to_transfer),
                ),
            ]);
        }
    }

    fn report_verdict(&mut self, request: &StakingRequest, verdict: &ValidationVerdict) {
        let parsed = verdict
            .parsed_amount_minimal_units
            .map(|amount| amount.to_string())
            .unwrap_or_default();
        self.verdicts.push(format!(
            "{},{},{},{},{},{},{}",
            request.action,
            request.validator,
            request.amount,
            parsed,
            verdict.is_decimal_format_valid,
            verdict.has_sufficient_source_balance,
            verdict.is_action_allowed
        ));
    }

    fn flush(&mut self) {
        print!("{}", self.render());
    }
}
