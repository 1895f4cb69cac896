//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last segment |
//! | CPU Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Max Wait | Longest single waiting time |
//! | Context Switches | Changes of running process between segments |
//! | Avg Response | Mean(first dispatch - arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use crate::models::{MetricsSummary, ScheduleResult, Slot};

/// Performance indicators of one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Non-idle ticks.
    pub busy_time: i64,
    /// Idle ticks.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Longest waiting time of any process.
    pub max_wait_time: i64,
    /// Number of switches from one process to a different one.
    pub context_switches: usize,
    /// Mean response time.
    pub avg_response_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let timeline = &result.timeline;
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                result.processes.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        // Idle gaps do not count; P1 | idle | P2 is one switch.
        let mut context_switches = 0;
        let mut last: Option<&str> = None;
        for seg in &timeline.segments {
            if let Slot::Process(id) = &seg.slot {
                let id = id.as_str();
                if last.is_some_and(|prev| prev != id) {
                    context_switches += 1;
                }
                last = Some(id);
            }
        }

        Self {
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            max_wait_time: result
                .processes
                .iter()
                .map(|p| p.wait_time)
                .max()
                .unwrap_or(0),
            context_switches,
            avg_response_time: MetricsSummary::from_completed(&result.processes)
                .map(|s| s.avg_response_time)
                .unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{Fcfs, RoundRobin, SchedulingAlgorithm, Srtf};

    #[test]
    fn test_kpi_with_idle() {
        let processes = vec![
            Process::new("P1", 2).with_arrival(1),
            Process::new("P2", 3).with_arrival(6),
        ];
        let r = Fcfs.schedule(&processes).unwrap();
        let kpi = ScheduleKpi::calculate(&r);

        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.busy_time, 5);
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.cpu_utilization - 5.0 / 9.0).abs() < 1e-10);
        assert!((kpi.throughput - 2.0 / 9.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 1);
        assert_eq!(kpi.max_wait_time, 0);
    }

    #[test]
    fn test_kpi_srtf_switches() {
        let processes = vec![
            Process::new("P1", 8),
            Process::new("P2", 4).with_arrival(1),
            Process::new("P3", 9).with_arrival(2),
            Process::new("P4", 5).with_arrival(3),
        ];
        let kpi = ScheduleKpi::calculate(&Srtf.schedule(&processes).unwrap());
        // P1 | P2 | P4 | P1 | P3
        assert_eq!(kpi.context_switches, 4);
        assert_eq!(kpi.max_wait_time, 15);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_rr_same_process_slices() {
        let r = RoundRobin::new(1)
            .unwrap()
            .schedule(&[Process::new("P1", 3)])
            .unwrap();
        let kpi = ScheduleKpi::calculate(&r);
        assert_eq!(kpi.context_switches, 0);
        assert!((kpi.avg_response_time - 0.0).abs() < 1e-10);
    }
}
