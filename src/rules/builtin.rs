//! Pattern literals for the built-in rule-set versions.
//!
//! Baseline is the first revision of the phrase rules. Improved widens the
//! verb-ending classes, allows words between the verb and the day-word, and
//! adds trigger phrases.

/// Baseline job-search intent pattern.
pub(crate) const BASELINE_JOB_SEARCH: &str =
    r"активно\s+ищ[уы]\s+работу|ищ[уы]\s+работу|активен|готов\s+к\s+работе";

/// Baseline readiness-to-start pattern.
pub(crate) const BASELINE_READY_TO_START: &str = r"готов\s+выйти\s+(?:завтра|сегодня|немедленно|сразу)|готов\s+(?:завтра|сегодня|сразу)|могу\s+приступить\s+(?:завтра|сегодня|сразу)|начн[уы]\s+(?:завтра|сегодня|сразу)";

/// Improved job-search intent pattern.
pub(crate) const IMPROVED_JOB_SEARCH: &str =
    r"активно\s+ищ[ауеы]|ищ[ауеы]\s+работу|активен|готов\s+к\s+работе|рассматриваю\s+предложения";

/// Improved readiness-to-start pattern.
///
/// The bare `начн[уы]` alternative has no day-word requirement, so "начну"
/// alone counts as readiness.
pub(crate) const IMPROVED_READY_TO_START: &str = r"готов\s+(?:выйти|приступить|начать)?\s*(?:завтра|сегодня|немедленно|сразу)|могу\s+приступить|начн[уы]|готов\s+(?:завтра|сегодня|сразу)";
