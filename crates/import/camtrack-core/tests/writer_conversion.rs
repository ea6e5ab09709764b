use camtrack_core::{
    apply, extract_str, CameraSink, ChannelId, FrameTime, ImportConfig, MemoryCamera, Resolution,
    TrackingInfo, Vec3, SCENEKIT_METERS_SCALE,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn mk_info(samples: &[(Vec3, Vec3)]) -> TrackingInfo {
    TrackingInfo {
        resolution: Resolution {
            width: 1920,
            height: 1080,
        },
        fps: 60,
        time_keys: (0..samples.len()).map(|i| (i * 17).to_string()).collect(),
        positions: samples.iter().map(|(p, _)| *p).collect(),
        rotations: samples.iter().map(|(_, r)| *r).collect(),
        zooms: Vec::new(),
    }
}

fn channel_values(cam: &MemoryCamera, id: ChannelId) -> Vec<f64> {
    cam.channel(id).expect("channel exists").values()
}

#[test]
fn every_channel_gets_one_key_per_sample_at_its_ordinal() {
    let info = mk_info(&[
        (Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0)),
        (Vec3::new(1.0, 1.0, 1.0), Vec3::new(10.0, 10.0, 10.0)),
        (Vec3::new(2.0, 2.0, 2.0), Vec3::new(20.0, 20.0, 20.0)),
        (Vec3::new(3.0, 3.0, 3.0), Vec3::new(30.0, 30.0, 30.0)),
        (Vec3::new(4.0, 4.0, 4.0), Vec3::new(40.0, 40.0, 40.0)),
    ]);
    let mut cam = MemoryCamera::new();
    let summary = apply(&info, &mut cam, &ImportConfig::default()).expect("apply");

    assert_eq!(summary.frames, 5);
    assert_eq!(summary.channels, 6);
    assert_eq!(cam.track_count(), 6);
    for id in ChannelId::ALL {
        let ch = cam.channel(id).expect("channel created");
        assert_eq!(ch.frames(), vec![0, 1, 2, 3, 4], "{id:?}");
        for key in ch.keys() {
            assert_eq!(key.time.fps, 60);
        }
    }
    let created: Vec<ChannelId> = cam.channels().iter().map(|c| c.id).collect();
    assert_eq!(created, ChannelId::ALL.to_vec());
}

#[test]
fn position_z_flips_for_handedness() {
    let info = mk_info(&[(Vec3::new(1.0, 2.0, 3.0), Vec3::default())]);
    let mut cam = MemoryCamera::new();
    apply(&info, &mut cam, &ImportConfig::default()).expect("apply");

    assert_eq!(channel_values(&cam, ChannelId::POSITION_X), vec![1.0]);
    assert_eq!(channel_values(&cam, ChannelId::POSITION_Y), vec![2.0]);
    assert_eq!(channel_values(&cam, ChannelId::POSITION_Z), vec![-3.0]);
}

#[test]
fn rotation_is_negated_and_converted_to_radians() {
    let info = mk_info(&[(Vec3::default(), Vec3::new(30.0, 0.0, -45.0))]);
    let mut cam = MemoryCamera::new();
    apply(&info, &mut cam, &ImportConfig::default()).expect("apply");

    approx(channel_values(&cam, ChannelId::ROTATION_X)[0], -0.5236, 1e-4);
    approx(channel_values(&cam, ChannelId::ROTATION_Y)[0], 0.0, 1e-12);
    approx(channel_values(&cam, ChannelId::ROTATION_Z)[0], 0.7854, 1e-4);
}

#[test]
fn configured_scale_applies_to_positions_only() {
    let info = mk_info(&[(Vec3::new(100.0, 200.0, 300.0), Vec3::new(90.0, 0.0, 0.0))]);
    let cfg = ImportConfig::default().with_scale(SCENEKIT_METERS_SCALE);
    let mut cam = MemoryCamera::new();
    apply(&info, &mut cam, &cfg).expect("apply");

    approx(channel_values(&cam, ChannelId::POSITION_X)[0], 1.0, 1e-12);
    approx(channel_values(&cam, ChannelId::POSITION_Y)[0], 2.0, 1e-12);
    approx(channel_values(&cam, ChannelId::POSITION_Z)[0], -3.0, 1e-12);
    approx(
        channel_values(&cam, ChannelId::ROTATION_X)[0],
        -std::f64::consts::FRAC_PI_2,
        1e-12,
    );
}

#[test]
fn writing_twice_replaces_previous_tracks() {
    let xml = camtrack_test_fixtures::composites::xml("tracked-camera").expect("fixture xml");
    let info = extract_str(&xml, &ImportConfig::default()).expect("extract");

    let mut cam = MemoryCamera::new();
    let stale = cam.create_channel(ChannelId::POSITION_X);
    cam.insert_key(&stale, FrameTime::new(99, 24), 42.0);

    apply(&info, &mut cam, &ImportConfig::default()).expect("first apply");
    let first = cam.clone();
    apply(&info, &mut cam, &ImportConfig::default()).expect("second apply");

    assert_eq!(cam, first);
    assert_eq!(cam.track_count(), 6);
    assert_eq!(cam.key_count(), 6 * info.len());
    assert!(!channel_values(&cam, ChannelId::POSITION_X).contains(&42.0));
}

#[test]
fn source_time_markers_do_not_move_keys() {
    let mut info = mk_info(&[
        (Vec3::default(), Vec3::default()),
        (Vec3::default(), Vec3::default()),
    ]);
    info.time_keys = vec!["1000".into(), "5000".into()];
    let mut cam = MemoryCamera::new();
    apply(&info, &mut cam, &ImportConfig::default()).expect("apply");

    let keys = cam.channel(ChannelId::ROTATION_Y).expect("channel").keys();
    approx(keys[0].time.seconds(), 0.0, 1e-12);
    approx(keys[1].time.seconds(), 1.0 / 60.0, 1e-12);
}
