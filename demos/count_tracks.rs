use tripcount::{CountConfig, Detection, Frame, Run, TrackId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::BufRead;

    let mut args = std::env::args();

    let _ = args.next().unwrap();
    let config_file_name = args.next().expect("expected config file name");
    let in_file_name = args.next().expect("expected detections file name");

    let config: CountConfig = serde_json::from_str(&std::fs::read_to_string(config_file_name)?)?;
    let mut run = Run::new(config)?;

    let dets_file = std::fs::File::open(in_file_name)?;
    let reader = std::io::BufReader::new(dets_file).lines();

    // one frame per line: [frame_index, [[track_id, detection], ...]]
    for line in reader {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let (index, dets): (u64, Vec<(TrackId, Detection)>) = serde_json::from_str(&line)?;

        let mut frame = Frame::new(index);
        for (track_id, det) in dets {
            frame.push(track_id, det);
        }

        run.record_frame(&frame)?;
    }

    run.count();

    for crossing in run.counter().crossings() {
        println!(
            "track {:>4} frame {:>6} line {} {:>10} class {} ({:.3})",
            crossing.track_id,
            crossing.frame,
            crossing.tripline,
            crossing.direction,
            crossing.class,
            crossing.confidence,
        );
    }

    println!(
        "{} crossings over {} tracks",
        run.counter().total_crossings(),
        run.store().len()
    );

    Ok(())
}
