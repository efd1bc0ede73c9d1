use std::path::PathBuf;

use pronounce_merge::{AudioMerger, FfmpegMerger, MergeError};

#[tokio::test]
async fn merging_nothing_is_refused() {
    let dir = tempfile::TempDir::new().unwrap();
    let merger = FfmpegMerger::default();

    let err = merger
        .merge(&[], &dir.path().join("output.mp3"))
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::NoInputs));
}

#[tokio::test]
async fn missing_binary_is_a_spawn_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("tmp_0_0.mp3");
    std::fs::write(&input, b"not really audio").unwrap();
    let merger = FfmpegMerger::new(dir.path().join("no-such-ffmpeg"));

    let err = merger
        .merge(&[input.clone()], &dir.path().join("output.mp3"))
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::Spawn { .. }));
    assert!(input.exists());
}

#[cfg(unix)]
#[tokio::test]
async fn non_zero_exit_carries_stderr() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let fake = dir.path().join("fake-ffmpeg");
    std::fs::write(&fake, "#!/bin/sh\necho 'Invalid data found when processing input' >&2\nexit 1\n")
        .unwrap();
    std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

    let merger = FfmpegMerger::new(&fake);
    let inputs: Vec<PathBuf> = vec![dir.path().join("tmp_0_0.mp3")];
    let err = merger
        .merge(&inputs, &dir.path().join("output.mp3"))
        .await
        .unwrap_err();

    match err {
        MergeError::Failed { status, stderr } => {
            assert!(!status.success());
            assert_eq!(stderr, "Invalid data found when processing input");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn zero_exit_is_success() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let fake = dir.path().join("fake-ffmpeg");
    // Writes the last argument (the output path).
    std::fs::write(&fake, "#!/bin/sh\nfor last; do :; done\necho merged > \"$last\"\n").unwrap();
    std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

    let output = dir.path().join("output.mp3");
    let merger = FfmpegMerger::new(&fake);
    merger
        .merge(&[dir.path().join("a.mp3"), dir.path().join("b.mp3")], &output)
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "merged\n");
}
