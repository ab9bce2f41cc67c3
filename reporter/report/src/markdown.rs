use crate::report::ComparisonReport;
use crate::run_data::ExtractedRunData;
use crate::system_kind::SystemKind;
use crate::system_run::SystemRun;
use crate::utils::{parse_throughput, template_value, UNDEFINED};

const TABLE_HEADER: &str = "| Provider | Pub Latency Avg (ms) | Pub Latency P99 (ms) | E2E Latency Avg (ms) | E2E Latency P95 (ms) | E2E Latency P99 (ms) | Baseline Cost | Usage Cost | Total Cost |";
const TABLE_DIVIDER: &str = "| -------- | -------------------- | -------------------- | -------------------- | -------------------- | -------------------- | ------------- | ---------- | ---------- |";

impl ComparisonReport {
    /// Composes the full Markdown comment body: timestamp, both systems'
    /// configuration blocks, replication factors, throughput figures and the
    /// latency/cost comparison table.
    pub fn to_markdown(&self) -> String {
        format!(
            "## Benchmark Comparison Result 🚀\n\
             #### Benchmark Info\n\
             **Report Generated:** {timestamp}\n\
             #### Workload Configuration\n\
             {workload}\n\
             #### Producer Configuration\n\
             {producer}\n\
             #### Consumer Configuration\n\
             {consumer}\n\
             #### Topic Configuration\n\
             {topic}\n\
             #### Replication Factor\n\
             [{candidate_kind}] {candidate_replication}\n\
             [{baseline_kind}] {baseline_replication}\n\
             #### Average Throughput\n\
             Average Throughput [{candidate_kind}]: {candidate_throughput:.2} MB/s\n\
             Average Throughput [{baseline_kind}]: {baseline_throughput:.2} MB/s\n\
             \n\
             > Cost Estimate Rule: check the explanation under the cost-explanation directory of this repository\n\
             \n\
             {table_header}\n\
             {table_divider}\n\
             {candidate_row}\n\
             {baseline_row}\n",
            timestamp = self.timestamp,
            workload = self.paired_section(ExtractedRunData::workload_config_pairs),
            producer = self.paired_section(ExtractedRunData::producer_config_pairs),
            consumer = self.paired_section(ExtractedRunData::consumer_config_pairs),
            topic = self.paired_section(ExtractedRunData::topic_config_pairs),
            candidate_kind = SystemKind::Candidate,
            baseline_kind = SystemKind::Baseline,
            candidate_replication = template_value(self.candidate.run_data.replication_factor.as_ref()),
            baseline_replication = template_value(self.baseline.run_data.replication_factor.as_ref()),
            candidate_throughput = parse_throughput(self.candidate.run_data.average_throughput.as_ref()),
            baseline_throughput = parse_throughput(self.baseline.run_data.average_throughput.as_ref()),
            table_header = TABLE_HEADER,
            table_divider = TABLE_DIVIDER,
            candidate_row = self.candidate.table_row(SystemKind::Candidate),
            baseline_row = self.baseline.table_row(SystemKind::Baseline),
        )
    }

    /// Renders one configuration section with a labelled block per system.
    fn paired_section(&self, pairs: fn(&ExtractedRunData) -> String) -> String {
        format!(
            "[{}]\n{}\n[{}]\n{}",
            SystemKind::Candidate,
            pairs(&self.candidate.run_data),
            SystemKind::Baseline,
            pairs(&self.baseline.run_data),
        )
    }
}

impl SystemRun {
    fn table_row(&self, kind: SystemKind) -> String {
        format!(
            "| {} | {} | {} | {:.2} | {:.2} | {:.2} | {} | {} | {} |",
            kind,
            template_value(self.run_data.average_pub_latency.as_ref()),
            template_value(self.run_data.p99_pub_latency.as_ref()),
            self.result.aggregated_end_to_end_latency_avg,
            self.result.aggregated_end_to_end_latency_95pct,
            self.result.aggregated_end_to_end_latency_99pct,
            self.costs.baseline.as_deref().unwrap_or(UNDEFINED),
            self.costs.usage.as_deref().unwrap_or(UNDEFINED),
            self.costs.total.as_deref().unwrap_or(UNDEFINED),
        )
    }
}
