use crate::models::plan::PLANS;

pub fn plans() -> Vec<String> {
    let mut out = Vec::with_capacity(PLANS.len() + 1);
    out.push("Available plans:".to_string());
    out.extend(PLANS.iter().map(|plan| plan.to_string()));
    out
}
