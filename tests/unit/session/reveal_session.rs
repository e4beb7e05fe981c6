use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::foundation::core::{ContainerRect, ShapeBounds};
use crate::mask::path::LogoPath;
use crate::session::geometry::StaticGeometry;
use crate::session::source::ScriptedScroll;
use crate::session::surface::RecordingSurface;

#[derive(Clone, Default)]
struct SharedSource(Rc<RefCell<ScriptedScroll>>);

impl ScrollSource for SharedSource {
    fn init(&mut self) -> RevealResult<()> {
        self.0.borrow_mut().init()
    }

    fn poll_progress(&mut self) -> Option<f64> {
        self.0.borrow_mut().poll_progress()
    }

    fn teardown(&mut self) {
        self.0.borrow_mut().teardown()
    }
}

#[derive(Clone)]
struct SharedGeometry(Rc<RefCell<StaticGeometry>>);

impl GeometryProvider for SharedGeometry {
    fn container_rect(&self) -> RevealResult<ContainerRect> {
        self.0.borrow().container_rect()
    }

    fn mask_bounds(&self) -> RevealResult<ShapeBounds> {
        self.0.borrow().mask_bounds()
    }
}

struct FlakySurface {
    inner: RecordingSurface,
    fail_next_commit: bool,
}

impl RenderSurface for FlakySurface {
    fn commit(&mut self, commit: &FrameCommit) -> RevealResult<()> {
        if std::mem::take(&mut self.fail_next_commit) {
            return Err(RevealError::render("layer detached"));
        }
        self.inner.commit(commit)
    }

    fn apply_mask(&mut self, transform: &MaskTransform) -> RevealResult<()> {
        self.inner.apply_mask(transform)
    }
}

fn square_logo() -> LogoPath {
    LogoPath::parse("M0,0 L50,0 L50,50 L0,50 Z").unwrap()
}

fn session_with(
    samples: &[f64],
    geometry: StaticGeometry,
    mode: UpdateMode,
) -> (RevealSession, SharedSource, SharedGeometry) {
    let source = SharedSource::default();
    for &p in samples {
        source.0.borrow_mut().push(p);
    }
    let geometry = SharedGeometry(Rc::new(RefCell::new(geometry)));
    let session = RevealSession::new(
        ProgressMapper::default(),
        Box::new(source.clone()),
        Box::new(geometry.clone()),
        RevealSessionOpts { mode },
    );
    (session, source, geometry)
}

fn wide_geometry() -> StaticGeometry {
    StaticGeometry::new(ContainerRect::new(0.0, 0.0, 200.0, 100.0), square_logo())
}

#[test]
fn tick_requires_mount() {
    let (mut s, _, _) = session_with(&[0.5], wide_geometry(), UpdateMode::Total);
    let mut surface = RecordingSurface::new();
    assert!(s.tick(&mut surface).is_err());
    assert!(s.resize(&mut surface).is_err());
    assert!(surface.commits().is_empty());
}

#[test]
fn mount_initializes_source_and_fits_mask() {
    let (mut s, source, _) = session_with(&[], wide_geometry(), UpdateMode::Total);
    let mut surface = RecordingSurface::new();
    s.mount(&mut surface).unwrap();

    assert!(s.is_mounted());
    assert!(source.0.borrow().is_active());
    assert_eq!(surface.masks().len(), 1);
    assert_eq!(surface.masks()[0].to_string(), "translate(50, 0) scale(2)");
    assert_eq!(s.mask(), Some(surface.masks()[0]));
    assert!(s.mount(&mut surface).is_err());
}

#[test]
fn ticks_commit_one_full_state_per_sample() {
    let (mut s, source, _) = session_with(&[0.0, 0.45], wide_geometry(), UpdateMode::Total);
    source.0.borrow_mut().push_idle();
    source.0.borrow_mut().push_burst([0.7, 2.0]);
    let mut surface = RecordingSurface::new();
    s.mount(&mut surface).unwrap();

    assert!(s.tick(&mut surface).unwrap().is_some());
    let mid = s.tick(&mut surface).unwrap().unwrap();
    assert!((mid.fade_overlay_opacity - 0.5).abs() < 1e-9);
    assert_eq!(s.tick(&mut surface).unwrap(), None);
    let end = s.tick(&mut surface).unwrap().unwrap();
    assert_eq!(end, s.mapper().evaluate(1.0));

    let frames: Vec<u64> = surface.commits().iter().map(|c| c.frame).collect();
    assert_eq!(frames, vec![1, 2, 3]);
    assert_eq!(surface.commits()[2].progress, Progress::END);
    assert_eq!(s.frames_committed(), 3);
    assert_eq!(s.state(), &end);
}

#[test]
fn accumulate_mode_freezes_at_last_in_gate_sample() {
    let samples = [0.2, 0.8, 0.95];
    let (mut acc, _, _) = session_with(&samples, wide_geometry(), UpdateMode::Accumulate);
    let (mut total, _, _) = session_with(&samples, wide_geometry(), UpdateMode::Total);
    let mut a = RecordingSurface::new();
    let mut t = RecordingSurface::new();
    acc.mount(&mut a).unwrap();
    total.mount(&mut t).unwrap();
    for _ in 0..samples.len() {
        acc.tick(&mut a).unwrap();
        total.tick(&mut t).unwrap();
    }

    let frozen = acc.state();
    let at_08 = acc.mapper().evaluate(0.8);
    assert_eq!(frozen.hero_image_scale, at_08.hero_image_scale);
    assert_eq!(frozen.caption_opacity, at_08.caption_opacity);
    assert_eq!(total.state().hero_image_scale, 1.0);
    assert_eq!(total.state().caption_opacity, 1.0);
    assert_eq!(frozen.hero_overlay_opacity, 0.0);
}

#[test]
fn degenerate_resize_keeps_previous_mask() {
    let (mut s, _, geometry) = session_with(&[], wide_geometry(), UpdateMode::Total);
    let mut surface = RecordingSurface::new();
    s.mount(&mut surface).unwrap();
    let before = s.mask();

    *geometry.0.borrow_mut() = StaticGeometry::new(
        ContainerRect::new(0.0, 0.0, 300.0, 300.0),
        LogoPath::parse("M0,10 L80,10").unwrap(),
    );
    assert_eq!(s.resize(&mut surface).unwrap(), None);
    assert_eq!(s.mask(), before);
    assert_eq!(surface.masks().len(), 1);
}

#[test]
fn mount_on_degenerate_shape_defers_fit_until_resize() {
    let flat = StaticGeometry::new(
        ContainerRect::new(0.0, 0.0, 200.0, 100.0),
        LogoPath::parse("M0,10 L80,10").unwrap(),
    );
    let (mut s, _, geometry) = session_with(&[], flat, UpdateMode::Total);
    let mut surface = RecordingSurface::new();
    s.mount(&mut surface).unwrap();

    assert!(s.is_mounted());
    assert_eq!(s.mask(), None);
    assert!(surface.masks().is_empty());

    *geometry.0.borrow_mut() = wide_geometry();
    let t = s.resize(&mut surface).unwrap().unwrap();
    assert_eq!(t.to_string(), "translate(50, 0) scale(2)");
    assert_eq!(s.mask(), Some(t));
    assert_eq!(surface.masks().len(), 1);
}

#[test]
fn resize_refits_to_new_container() {
    let (mut s, _, geometry) = session_with(&[], wide_geometry(), UpdateMode::Total);
    let mut surface = RecordingSurface::new();
    s.mount(&mut surface).unwrap();

    geometry
        .0
        .borrow_mut()
        .set_container(ContainerRect::new(10.0, 10.0, 100.0, 400.0));
    let t = s.resize(&mut surface).unwrap().unwrap();
    assert_eq!(t.scale, 2.0);
    assert_eq!(t.translate_x, 10.0);
    assert_eq!(t.translate_y, 10.0 + 150.0);
    assert_eq!(surface.masks().len(), 2);
}

#[test]
fn geometry_failure_on_mount_tears_the_source_down() {
    let (mut s, source, _) = session_with(
        &[],
        StaticGeometry::detached(square_logo()),
        UpdateMode::Total,
    );
    let mut surface = RecordingSurface::new();
    let err = s.mount(&mut surface).unwrap_err();
    assert!(matches!(err, RevealError::Geometry(_)));
    assert!(!s.is_mounted());
    assert_eq!(source.0.borrow().lifecycle_counts(), (1, 1));
}

#[test]
fn failed_commit_does_not_advance_state() {
    let (mut s, _, _) = session_with(&[0.3, 0.3], wide_geometry(), UpdateMode::Accumulate);
    let mut surface = FlakySurface {
        inner: RecordingSurface::new(),
        fail_next_commit: false,
    };
    s.mount(&mut surface).unwrap();
    let initial = *s.state();

    surface.fail_next_commit = true;
    assert!(s.tick(&mut surface).is_err());
    assert_eq!(s.state(), &initial);
    assert_eq!(s.frames_committed(), 0);

    let next = s.tick(&mut surface).unwrap().unwrap();
    assert_eq!(surface.inner.commits()[0].frame, 1);
    assert_eq!(next, s.mapper().evaluate(0.3));
}

#[test]
fn unmount_is_idempotent_and_stops_ticks() {
    let (mut s, source, _) = session_with(&[0.1], wide_geometry(), UpdateMode::Total);
    let mut surface = RecordingSurface::new();
    s.mount(&mut surface).unwrap();
    s.unmount();
    s.unmount();
    assert_eq!(source.0.borrow().lifecycle_counts(), (1, 1));
    assert!(s.tick(&mut surface).is_err());
}
