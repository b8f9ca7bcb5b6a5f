//! Playback controller
//!
//! The controller owns the active trace, the position pointer, autoplay
//! timing and the algorithm parameters. It is the only object consumers
//! talk to: every operation runs to completion under one lock and ends by
//! handing a fresh [`Snapshot`] to the registered listener.
//!
//! # State machine
//! - `Idle`: pointer before the first step
//! - `Paused`: pointer on a step, timer stopped
//! - `Playing`: timer running, one step per period
//! - `Finished`: pointer on the last step, timer stopped
//!
//! Every timer start bumps a generation counter. A tick carries the
//! generation it was started with and is ignored once that generation is
//! stale, so ticks racing with `pause`, `set_speed` or `reset` have no
//! effect.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::ops::ControlFlow;
use std::sync::{Arc, Weak};
use std::time::Duration;

use log::{debug, info, trace, warn};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::algorithm::traits::{AlgorithmError, AlgorithmId, AlgorithmParams};
use crate::config::{ConfigError, PlaybackConfig};
use crate::data_structures::generator::{generate_graph_with, random_dataset_with};
use crate::data_structures::graph::Graph;
use crate::execution::replay::{reconstruct, Dataset};
use crate::execution::trace::Step;
use crate::temporal::snapshot::{PathEndpoints, PlaybackState, Snapshot, StepStats};
use crate::temporal::timer::PlaybackTimer;

/// Callback receiving every emitted snapshot
///
/// Runs while the controller lock is held and must not call back into the
/// controller.
pub type SnapshotListener = Box<dyn FnMut(&Snapshot) + Send>;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Autoplay requires a running tokio runtime")]
    RuntimeUnavailable,

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Mutable session guarded by the controller lock
struct Session {
    config: PlaybackConfig,
    rng: ChaCha20Rng,
    algorithm: AlgorithmId,
    /// Dataset as supplied, before any algorithm-specific preparation
    base: Vec<i64>,
    graph: Option<Graph>,
    params: AlgorithmParams,
    /// Dataset the current trace was generated from
    input: Dataset,
    search_target: Option<i64>,
    /// Shared with every snapshot handed out since the last regeneration
    trace: Arc<[Step]>,
    pointer: Option<usize>,
    playing: bool,
    speed_ms: u64,
    generation: u64,
    timer: Option<PlaybackTimer>,
    listener: Option<SnapshotListener>,
}

impl Session {
    fn new(base: Vec<i64>, config: PlaybackConfig, listener: Option<SnapshotListener>) -> Self {
        let rng = config
            .seed
            .map_or_else(ChaCha20Rng::from_entropy, ChaCha20Rng::seed_from_u64);
        let mut session = Self {
            speed_ms: config.default_speed_ms.max(1),
            base: Vec::new(),
            config,
            rng,
            algorithm: AlgorithmId::default(),
            graph: None,
            params: AlgorithmParams::default(),
            input: Dataset::Array(Vec::new()),
            search_target: None,
            trace: Arc::from(Vec::new()),
            pointer: None,
            playing: false,
            generation: 0,
            timer: None,
            listener,
        };
        session.base = session.bounded(base);
        session.regenerate();
        session
    }

    /// Truncates datasets beyond the configured maximum
    fn bounded(&self, mut data: Vec<i64>) -> Vec<i64> {
        let max = self.config.max_elements;
        if data.len() > max {
            warn!("Dataset of {} elements truncated to {}", data.len(), max);
            data.truncate(max);
        }
        data
    }

    #[inline]
    fn last_index(&self) -> Option<usize> {
        self.trace.len().checked_sub(1)
    }

    fn is_finished(&self) -> bool {
        self.pointer.is_some() && self.pointer == self.last_index()
    }

    fn state(&self) -> PlaybackState {
        PlaybackState::derive(self.pointer, self.trace.len(), self.playing)
    }

    /// Rebuild the working dataset and trace; pointer returns to the start
    fn regenerate(&mut self) {
        if self.algorithm.uses_graph() {
            let nodes = self.params.graph_nodes.unwrap_or(self.config.default_graph_nodes);
            let stale = self.graph.as_ref().map_or(true, |graph| graph.node_count() != nodes);
            if stale {
                debug!("Generating graph with {} nodes", nodes);
                self.graph = Some(generate_graph_with(&mut self.rng, nodes, &self.config.graph));
            }
            self.input = Dataset::Graph(self.graph.clone().unwrap_or_default());
        } else {
            if self.graph.take().is_some() {
                debug!("Discarding graph dataset");
            }
            let mut working = self.base.clone();
            if self.algorithm.requires_sorted_input() {
                working.sort_unstable();
            }
            self.input = Dataset::Array(working);
        }

        let mut params = self.params.clone();
        self.search_target = None;
        if self.algorithm.uses_target() {
            if params.target.is_none() {
                let middle = |values: &[i64]| values.get(values.len() / 2).copied();
                params.target = self.input.as_array().and_then(middle);
            }
            self.search_target = params.target;
        }

        self.trace = self.algorithm.generate(&self.input, &params).into();
        self.pointer = None;
        debug!("Generated {} trace with {} steps", self.algorithm, self.trace.len());
    }

    /// Stop autoplay, apply the replacements, regenerate and emit
    fn reset(&mut self, dataset: Option<Vec<i64>>, params: Option<AlgorithmParams>) {
        self.stop();

        if let Some(data) = dataset {
            self.base = self.bounded(data);
        }
        if let Some(mut params) = params {
            let max_nodes = self.config.max_graph_nodes;
            if let Some(nodes) = params.graph_nodes.filter(|&nodes| nodes > max_nodes) {
                warn!("Graph size {} clamped to {}", nodes, max_nodes);
                params.graph_nodes = Some(max_nodes);
            }
            self.params = params;
        }

        self.regenerate();
        self.emit();
    }

    fn snapshot(&self) -> Snapshot {
        let path_endpoints = self.algorithm.uses_graph().then_some(PathEndpoints {
            source: self.params.source,
            destination: self.params.destination,
        });

        Snapshot {
            algorithm: self.algorithm,
            dataset: reconstruct(&self.input, &self.trace, self.pointer),
            trace: Arc::clone(&self.trace),
            pointer: self.pointer,
            state: self.state(),
            playing: self.playing,
            speed_ms: self.speed_ms,
            finished: self.is_finished(),
            current_step: self.pointer.and_then(|index| self.trace.get(index).cloned()),
            search_target: self.search_target,
            path_endpoints,
            stats: StepStats::upto(&self.trace, self.pointer),
        }
    }

    fn emit(&mut self) {
        if self.listener.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(listener) = self.listener.as_mut() {
            listener(&snapshot);
        }
    }

    /// Stop the timer and invalidate any tick already in flight
    fn disarm(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
    }

    fn stop(&mut self) {
        self.disarm();
        self.playing = false;
    }

    fn step_forward(&mut self) -> bool {
        match (self.pointer, self.last_index()) {
            (None, Some(_)) => {
                self.pointer = Some(0);
                true
            }
            (Some(index), Some(last)) if index < last => {
                self.pointer = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, generation: u64) -> ControlFlow<()> {
        if generation != self.generation || !self.playing {
            trace!("Ignoring stale tick of generation {}", generation);
            return ControlFlow::Break(());
        }

        if self.step_forward() {
            trace!("Tick advanced pointer to {:?}", self.pointer);
            self.emit();
            return ControlFlow::Continue(());
        }

        debug!("Autoplay reached the end of the trace");
        self.stop();
        self.emit();
        ControlFlow::Break(())
    }
}

/// Start a timer for the session behind `shared`
fn arm(shared: &Arc<Mutex<Session>>, session: &mut Session, runtime: Handle) {
    session.disarm();
    let generation = session.generation;
    let weak: Weak<Mutex<Session>> = Arc::downgrade(shared);
    let period = Duration::from_millis(session.speed_ms);

    session.timer = Some(PlaybackTimer::start(runtime, period, move || {
        let Some(shared) = weak.upgrade() else {
            return ControlFlow::Break(());
        };
        let mut session = shared.lock();
        session.tick(generation)
    }));
}

/// Handle to a playback session
///
/// Cloning is not offered: the controller owns its timer, and dropping it
/// cancels autoplay.
pub struct PlaybackController {
    inner: Arc<Mutex<Session>>,
}

impl PlaybackController {
    /// Session over `initial` with the default configuration
    pub fn new(initial: Vec<i64>) -> Self {
        Self::build(initial, PlaybackConfig::default(), None)
    }

    pub fn with_config(initial: Vec<i64>, config: PlaybackConfig) -> Result<Self, PlaybackError> {
        config.validate()?;
        Ok(Self::build(initial, config, None))
    }

    /// Session that reports every snapshot to `listener`, starting with the
    /// initial one
    pub fn with_listener<F>(initial: Vec<i64>, config: PlaybackConfig, listener: F) -> Result<Self, PlaybackError>
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        config.validate()?;
        Ok(Self::build(initial, config, Some(Box::new(listener))))
    }

    /// Session that streams its snapshots through an unbounded channel
    pub fn with_channel(
        initial: Vec<i64>,
        config: PlaybackConfig,
    ) -> Result<(Self, mpsc::UnboundedReceiver<Snapshot>), PlaybackError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self::with_listener(initial, config, move |snapshot: &Snapshot| {
            if tx.send(snapshot.clone()).is_err() {
                trace!("Snapshot receiver dropped");
            }
        })?;
        Ok((controller, rx))
    }

    /// Session over a random dataset drawn as the configuration describes
    pub fn random(config: PlaybackConfig) -> Result<Self, PlaybackError> {
        config.validate()?;
        let mut rng = config
            .seed
            .map_or_else(ChaCha20Rng::from_entropy, ChaCha20Rng::seed_from_u64);
        let data = random_dataset_with(&mut rng, config.dataset_size, config.value_min, config.value_max);
        Ok(Self::build(data, config, None))
    }

    fn build(initial: Vec<i64>, config: PlaybackConfig, listener: Option<SnapshotListener>) -> Self {
        let mut session = Session::new(initial, config, listener);
        info!(
            "Playback session started: {} over {} values",
            session.algorithm,
            session.base.len()
        );
        session.emit();
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Start autoplay; the first step follows one full period later
    ///
    /// Fails without touching the session when called outside a tokio
    /// runtime.
    pub fn play(&self) -> Result<(), PlaybackError> {
        let runtime = Handle::try_current().map_err(|_| PlaybackError::RuntimeUnavailable)?;
        let mut session = self.inner.lock();
        if session.playing {
            return Ok(());
        }

        session.playing = true;
        arm(&self.inner, &mut session, runtime);
        debug!("Autoplay started at {} ms per step", session.speed_ms);
        session.emit();
        Ok(())
    }

    pub fn pause(&self) {
        let mut session = self.inner.lock();
        session.stop();
        session.emit();
    }

    /// Advance one step, staying on the last one
    pub fn next(&self) {
        let mut session = self.inner.lock();
        session.step_forward();
        session.emit();
    }

    /// Go back one step, down to the position before the first one
    pub fn prev(&self) {
        let mut session = self.inner.lock();
        session.pointer = session.pointer.and_then(|index| index.checked_sub(1));
        session.emit();
    }

    /// Change the autoplay period; a running timer restarts with the new one
    pub fn set_speed(&self, ms: u64) {
        let mut session = self.inner.lock();
        session.speed_ms = ms.max(1);

        if session.playing {
            let runtime = session.timer.as_ref().map(|timer| timer.runtime().clone());
            match runtime.or_else(|| Handle::try_current().ok()) {
                Some(runtime) => arm(&self.inner, &mut session, runtime),
                None => {
                    warn!("Autoplay runtime is gone, pausing");
                    session.stop();
                }
            }
        }
        session.emit();
    }

    /// Stop autoplay, optionally replace dataset and parameters, regenerate
    /// the trace and rewind to the start
    ///
    /// Parameters left unset fall back to the session configuration.
    pub fn reset(&self, dataset: Option<Vec<i64>>, params: Option<AlgorithmParams>) {
        self.inner.lock().reset(dataset, params);
    }

    /// Replace the dataset with fresh random values
    pub fn randomize(&self) {
        let mut session = self.inner.lock();
        let config = &session.config;
        let (size, min, max) = (config.dataset_size, config.value_min, config.value_max);
        let data = random_dataset_with(&mut session.rng, size, min, max);
        session.reset(Some(data), None);
    }

    pub fn set_algorithm(&self, algorithm: AlgorithmId) {
        let mut session = self.inner.lock();
        if session.algorithm == algorithm {
            return;
        }
        info!("Switching algorithm from {} to {}", session.algorithm, algorithm);
        session.algorithm = algorithm;
        session.reset(None, None);
    }

    /// Switch by identifier; unknown names leave the session untouched
    pub fn set_algorithm_named(&self, name: &str) -> Result<(), PlaybackError> {
        let algorithm = name.parse::<AlgorithmId>().map_err(|err| {
            warn!("Rejected algorithm identifier {:?}", name);
            err
        })?;
        self.set_algorithm(algorithm);
        Ok(())
    }

    /// Run the shortest-path algorithm over a caller-supplied graph
    pub fn load_graph(&self, graph: Graph) {
        let mut session = self.inner.lock();
        session.stop();
        session.params.graph_nodes = Some(graph.node_count());
        session.graph = Some(graph);
        if session.algorithm != AlgorithmId::Dijkstra {
            info!("Switching algorithm from {} to {}", session.algorithm, AlgorithmId::Dijkstra);
            session.algorithm = AlgorithmId::Dijkstra;
        }
        session.regenerate();
        session.emit();
    }

    /// Current snapshot, without emitting it
    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.inner.lock().algorithm
    }

    pub fn state(&self) -> PlaybackState {
        self.inner.lock().state()
    }

    pub fn pointer(&self) -> Option<usize> {
        self.inner.lock().pointer
    }

    pub fn params(&self) -> AlgorithmParams {
        self.inner.lock().params.clone()
    }

    /// Cancel autoplay without emitting a snapshot
    pub fn shutdown(&self) {
        let mut session = self.inner.lock();
        if session.playing {
            debug!("Playback shut down while playing");
        }
        session.stop();
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::graph::{GraphEdge, GraphNode, NodeId};
    use crate::execution::trace::StepKind;
    use tokio::time::sleep;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn seeded() -> PlaybackConfig {
        PlaybackConfig {
            seed: Some(7),
            ..PlaybackConfig::default()
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_starts_idle_on_bubble_sort() {
        init_logging();
        let controller = PlaybackController::new(vec![3, 1, 2]);
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.algorithm, AlgorithmId::BubbleSort);
        assert_eq!(snapshot.state, PlaybackState::Idle);
        assert_eq!(snapshot.pointer, None);
        assert_eq!(snapshot.speed_ms, 1000);
        assert!(!snapshot.finished);
        assert!(snapshot.current_step.is_none());
        assert_eq!(snapshot.array(), Some(&[3, 1, 2][..]));
    }

    #[test]
    fn test_next_and_prev_clamp() {
        let controller = PlaybackController::new(vec![2, 1]);
        let len = controller.snapshot().step_count();

        controller.prev();
        assert_eq!(controller.pointer(), None);

        for _ in 0..len + 3 {
            controller.next();
        }
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.pointer, Some(len - 1));
        assert_eq!(snapshot.state, PlaybackState::Finished);
        assert!(snapshot.finished);
        assert_eq!(snapshot.array(), Some(&[1, 2][..]));

        controller.prev();
        assert_eq!(controller.state(), PlaybackState::Paused);
        for _ in 0..len + 3 {
            controller.prev();
        }
        assert_eq!(controller.pointer(), None);
        assert_eq!(controller.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_snapshot_tracks_current_step_and_stats() {
        let controller = PlaybackController::new(vec![2, 1]);
        controller.next();
        controller.next();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.current_step.as_ref().map(|s| s.kind), Some(StepKind::Swap));
        assert_eq!(snapshot.stats.comparisons, 1);
        assert_eq!(snapshot.stats.swaps, 1);
        assert_eq!(snapshot.stats.steps_taken, 2);
        assert_eq!(snapshot.array(), Some(&[1, 2][..]));
    }

    #[test]
    fn test_play_without_runtime_fails_cleanly() {
        let controller = PlaybackController::new(vec![3, 1, 2]);
        assert!(matches!(controller.play(), Err(PlaybackError::RuntimeUnavailable)));
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(!controller.snapshot().playing);
    }

    #[test]
    fn test_reset_always_returns_to_idle() {
        let controller = PlaybackController::new(vec![4, 3, 2, 1]);
        controller.next();
        controller.next();
        controller.reset(None, None);
        assert_eq!(controller.pointer(), None);
        assert_eq!(controller.state(), PlaybackState::Idle);

        controller.reset(Some(vec![9, 8]), None);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, PlaybackState::Idle);
        assert_eq!(snapshot.array(), Some(&[9, 8][..]));
    }

    #[test]
    fn test_reset_from_finished_rewinds_to_idle() {
        let controller = PlaybackController::new(vec![3, 1, 2]);
        let len = controller.snapshot().step_count();
        for _ in 0..len {
            controller.next();
        }
        assert_eq!(controller.state(), PlaybackState::Finished);

        controller.reset(None, None);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, PlaybackState::Idle);
        assert_eq!(snapshot.pointer, None);
        assert!(!snapshot.finished);
        assert_eq!(snapshot.array(), Some(&[3, 1, 2][..]));
    }

    #[test]
    fn test_snapshots_share_trace_until_regenerated() {
        let controller = PlaybackController::new(vec![3, 1, 2]);
        let first = controller.snapshot();
        controller.next();
        let second = controller.snapshot();
        assert!(Arc::ptr_eq(&first.trace, &second.trace));

        controller.reset(None, None);
        let third = controller.snapshot();
        assert!(!Arc::ptr_eq(&first.trace, &third.trace));
        assert_eq!(first.trace, third.trace);
    }

    #[test]
    fn test_reset_truncates_oversized_dataset() {
        let config = PlaybackConfig {
            max_elements: 5,
            dataset_size: 5,
            ..seeded()
        };
        let controller = PlaybackController::with_config((0..10).collect(), config).unwrap();
        assert_eq!(controller.snapshot().array().map(<[i64]>::len), Some(5));

        controller.reset(Some((0..8).rev().collect()), None);
        assert_eq!(controller.snapshot().array(), Some(&[7, 6, 5, 4, 3][..]));
    }

    #[test]
    fn test_binary_search_sorts_working_dataset() {
        let controller = PlaybackController::new(vec![50, 10, 40, 20, 30]);
        controller.set_algorithm(AlgorithmId::BinarySearch);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.array(), Some(&[10, 20, 30, 40, 50][..]));
        assert_eq!(snapshot.search_target, Some(30));
        assert_eq!(snapshot.trace.last().map(|s| s.kind), Some(StepKind::Found));

        controller.reset(None, Some(AlgorithmParams::with_target(40)));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.search_target, Some(40));
        assert_eq!(snapshot.trace.last().map(|s| s.positions.clone()), Some(vec![3]));

        controller.set_algorithm(AlgorithmId::MergeSort);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.array(), Some(&[50, 10, 40, 20, 30][..]));
        assert_eq!(snapshot.search_target, None);
    }

    #[test]
    fn test_graph_lifecycle_follows_algorithm() {
        let controller = PlaybackController::with_config(vec![5, 4, 3], seeded()).unwrap();
        controller.set_algorithm(AlgorithmId::Dijkstra);

        let snapshot = controller.snapshot();
        let graph = snapshot.graph().unwrap();
        assert_eq!(graph.node_count(), 8);
        assert_eq!(
            snapshot.path_endpoints,
            Some(PathEndpoints {
                source: NodeId(0),
                destination: None
            })
        );
        assert!(snapshot.trace.iter().any(|s| s.kind == StepKind::Visit));

        // same node count keeps the graph across resets
        let before = graph.clone();
        controller.reset(None, None);
        assert_eq!(controller.snapshot().graph(), Some(&before));

        controller.reset(
            None,
            Some(AlgorithmParams {
                graph_nodes: Some(5),
                ..AlgorithmParams::default()
            }),
        );
        assert_eq!(controller.snapshot().graph().map(Graph::node_count), Some(5));

        controller.set_algorithm(AlgorithmId::QuickSort);
        let snapshot = controller.snapshot();
        assert!(snapshot.graph().is_none());
        assert!(snapshot.path_endpoints.is_none());
        assert_eq!(snapshot.array(), Some(&[5, 4, 3][..]));
    }

    #[test]
    fn test_unset_graph_size_uses_configured_default() {
        let config = PlaybackConfig {
            default_graph_nodes: 12,
            ..seeded()
        };
        let controller = PlaybackController::with_config(vec![1, 2, 3], config).unwrap();
        controller.set_algorithm(AlgorithmId::Dijkstra);
        assert_eq!(controller.snapshot().graph().map(Graph::node_count), Some(12));

        controller.reset(None, Some(AlgorithmParams::with_target(5)));
        assert_eq!(controller.params().graph_nodes, None);
        assert_eq!(controller.snapshot().graph().map(Graph::node_count), Some(12));

        controller.reset(
            None,
            Some(AlgorithmParams {
                graph_nodes: Some(40),
                ..AlgorithmParams::default()
            }),
        );
        assert_eq!(controller.params().graph_nodes, Some(25));
        assert_eq!(controller.snapshot().graph().map(Graph::node_count), Some(25));
    }

    #[test]
    fn test_load_graph_runs_shortest_path() {
        let controller = PlaybackController::new(vec![1, 2, 3]);
        let graph = Graph::new(
            (0..4).map(|id| GraphNode::new(id, 0.0, 0.0)).collect(),
            vec![
                GraphEdge::new(0, 1, 4),
                GraphEdge::new(0, 2, 1),
                GraphEdge::new(2, 1, 2),
                GraphEdge::new(1, 3, 1),
                GraphEdge::new(2, 3, 5),
            ],
        );
        controller.load_graph(graph.clone());

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.algorithm, AlgorithmId::Dijkstra);
        assert_eq!(snapshot.graph(), Some(&graph));
        let visits: Vec<usize> = snapshot
            .trace
            .iter()
            .filter(|s| s.kind == StepKind::Visit)
            .map(|s| s.positions[0])
            .collect();
        assert_eq!(visits, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_unknown_algorithm_name_is_rejected() {
        let controller = PlaybackController::new(vec![3, 1, 2]);
        controller.set_algorithm(AlgorithmId::HeapSort);
        controller.next();

        let result = controller.set_algorithm_named("bogo-sort");
        assert!(matches!(result, Err(PlaybackError::Algorithm(AlgorithmError::UnknownAlgorithm(_)))));
        assert_eq!(controller.algorithm(), AlgorithmId::HeapSort);
        assert_eq!(controller.pointer(), Some(0));

        controller.set_algorithm_named("linearSearch").unwrap();
        assert_eq!(controller.algorithm(), AlgorithmId::LinearSearch);
    }

    #[test]
    fn test_set_algorithm_to_same_id_keeps_position() {
        let controller = PlaybackController::new(vec![3, 1, 2]);
        controller.next();
        controller.set_algorithm(AlgorithmId::BubbleSort);
        assert_eq!(controller.pointer(), Some(0));
    }

    #[test]
    fn test_listener_receives_every_snapshot_in_order() {
        let (controller, mut rx) = PlaybackController::with_channel(vec![2, 1], seeded()).unwrap();

        controller.next();
        controller.next();
        controller.prev();

        let pointers: Vec<Option<usize>> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|snapshot| snapshot.pointer)
            .collect();
        assert_eq!(pointers, vec![None, Some(0), Some(1), Some(0)]);
    }

    #[test]
    fn test_set_speed_updates_period() {
        let controller = PlaybackController::new(vec![2, 1]);
        controller.set_speed(250);
        assert_eq!(controller.snapshot().speed_ms, 250);
        controller.set_speed(0);
        assert_eq!(controller.snapshot().speed_ms, 1);
    }

    #[test]
    fn test_random_session_respects_config() {
        let config = PlaybackConfig {
            dataset_size: 12,
            ..seeded()
        };
        let first = PlaybackController::random(config.clone()).unwrap();
        let second = PlaybackController::random(config).unwrap();

        let values = first.snapshot().array().map(<[i64]>::to_vec).unwrap();
        assert_eq!(values.len(), 12);
        assert!(values.iter().all(|v| (10..=99).contains(v)));
        assert_eq!(second.snapshot().array(), Some(&values[..]));

        first.randomize();
        assert_eq!(first.state(), PlaybackState::Idle);
        assert_eq!(first.snapshot().array().map(<[i64]>::len), Some(12));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = PlaybackConfig {
            default_speed_ms: 0,
            ..PlaybackConfig::default()
        };
        assert!(matches!(
            PlaybackController::with_config(vec![1], config),
            Err(PlaybackError::Config(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_then_pause_before_tick_keeps_pointer() {
        init_logging();
        let controller = PlaybackController::new(vec![3, 1, 2]);
        controller.play().unwrap();
        assert_eq!(controller.state(), PlaybackState::Playing);

        sleep(ms(500)).await;
        controller.pause();
        sleep(ms(5000)).await;

        assert_eq!(controller.pointer(), None);
        assert_eq!(controller.state(), PlaybackState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_advances_once_per_period() {
        let controller = PlaybackController::new(vec![5, 4, 3, 2, 1]);
        controller.play().unwrap();

        sleep(ms(900)).await;
        assert_eq!(controller.pointer(), None);

        sleep(ms(200)).await;
        assert_eq!(controller.pointer(), Some(0));

        sleep(ms(2000)).await;
        assert_eq!(controller.pointer(), Some(2));

        controller.pause();
        assert_eq!(controller.state(), PlaybackState::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_finishes_at_last_step() {
        let (controller, mut rx) = PlaybackController::with_channel(vec![2, 1], seeded()).unwrap();
        let len = controller.snapshot().step_count();
        controller.play().unwrap();

        sleep(ms(1000 * (len as u64 + 2) + 500)).await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, PlaybackState::Finished);
        assert!(!snapshot.playing);
        assert!(snapshot.finished);
        assert_eq!(snapshot.pointer, Some(len - 1));

        let last = std::iter::from_fn(|| rx.try_recv().ok()).last().unwrap();
        assert_eq!(last.state, PlaybackState::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_speed_while_playing_restarts_period() {
        let controller = PlaybackController::new(vec![5, 4, 3, 2, 1]);
        controller.play().unwrap();

        sleep(ms(900)).await;
        controller.set_speed(500);
        assert_eq!(controller.state(), PlaybackState::Playing);

        // the old deadline at 1000 ms must not fire
        sleep(ms(400)).await;
        assert_eq!(controller.pointer(), None);

        sleep(ms(200)).await;
        assert_eq!(controller.pointer(), Some(0));

        sleep(ms(500)).await;
        assert_eq!(controller.pointer(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_while_playing_stops_timer() {
        let controller = PlaybackController::new(vec![5, 4, 3, 2, 1]);
        controller.play().unwrap();
        sleep(ms(2500)).await;
        assert_eq!(controller.pointer(), Some(1));

        controller.reset(None, None);
        sleep(ms(3000)).await;
        assert_eq!(controller.pointer(), None);
        assert_eq!(controller.state(), PlaybackState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_algorithm_while_playing_rejects_old_ticks() {
        let (controller, mut rx) = PlaybackController::with_channel(vec![5, 4, 3, 2, 1], seeded()).unwrap();
        controller.play().unwrap();
        sleep(ms(1500)).await;
        assert_eq!(controller.pointer(), Some(0));
        let stale = controller.inner.lock().generation;

        controller.set_algorithm(AlgorithmId::MergeSort);
        assert!(controller.inner.lock().tick(stale).is_break());
        sleep(ms(3000)).await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, PlaybackState::Idle);
        assert_eq!(snapshot.pointer, None);
        let input = Dataset::Array(vec![5, 4, 3, 2, 1]);
        let expected = AlgorithmId::MergeSort.generate(&input, &AlgorithmParams::default());
        assert_eq!(&snapshot.trace[..], &expected[..]);

        // every emitted snapshot pairs its algorithm with that algorithm's trace
        for emitted in std::iter::from_fn(|| rx.try_recv().ok()) {
            let trace = emitted.algorithm.generate(&input, &AlgorithmParams::default());
            assert_eq!(&emitted.trace[..], &trace[..]);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_is_idempotent() {
        let controller = PlaybackController::new(vec![5, 4, 3, 2, 1]);
        controller.play().unwrap();
        sleep(ms(500)).await;
        controller.play().unwrap();

        sleep(ms(600)).await;
        assert_eq!(controller.pointer(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_autoplay() {
        let (controller, mut rx) = PlaybackController::with_channel(vec![3, 2, 1], seeded()).unwrap();
        controller.play().unwrap();
        drop(controller);

        sleep(ms(5000)).await;
        let pointers: Vec<Option<usize>> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|snapshot| snapshot.pointer)
            .collect();
        assert!(pointers.iter().all(Option::is_none));
    }
}
