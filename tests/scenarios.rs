use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc, Arc,
  },
  thread,
  time::{Duration, Instant},
};

use trafficlight::{utils::thread::MessageQueue, CycleConfig, Phase, TrafficLight};

fn fast_light(min_ms: u64, max_ms: u64) -> Arc<TrafficLight> {
  trafficlight::init_logger();

  let config = CycleConfig::default().set_phase_range(min_ms, max_ms);
  Arc::new(TrafficLight::with_config(config).unwrap())
}

#[test]
fn wait_for_green_with_default_timing() {
  trafficlight::init_logger();

  let light = TrafficLight::new();
  light.simulate();

  let start = Instant::now();
  light.wait_for_green();

  assert!(start.elapsed() < Duration::from_millis(6100));
  assert_eq!(light.get_current_phase(), Phase::Green);
}

#[test]
fn wait_for_green_blocks_while_red() {
  let light = fast_light(200, 200);

  let start = Instant::now();
  light.simulate();
  light.wait_for_green();

  assert!(start.elapsed() >= Duration::from_millis(200));
  assert_eq!(light.get_current_phase(), Phase::Green);
}

#[test]
fn concurrent_waiters_all_return() {
  let light = fast_light(20, 40);
  light.simulate();

  let returned = Arc::new(AtomicUsize::new(0));
  let (sender, receiver) = mpsc::channel();

  for _ in 0..2 {
    let light = light.clone();
    let returned = returned.clone();
    let sender = sender.clone();
    thread::spawn(move || {
      for _ in 0..3 {
        light.wait_for_green();
      }
      returned.fetch_add(1, Ordering::SeqCst);
      let _ = sender.send(());
    });
  }

  for _ in 0..2 {
    receiver
      .recv_timeout(Duration::from_secs(10))
      .expect("waiter starved");
  }

  assert_eq!(returned.load(Ordering::SeqCst), 2);
}

#[test]
fn queue_delivers_in_send_order() {
  let queue = MessageQueue::new();
  let producer = queue.clone();

  let sender = thread::spawn(move || {
    for i in [1, 2, 3] {
      producer.send(i);
    }
  });
  let receiver = thread::spawn(move || (0..3).map(|_| queue.receive()).collect::<Vec<i32>>());

  sender.join().unwrap();
  assert_eq!(receiver.join().unwrap(), vec![1, 2, 3]);
}

#[test]
fn receive_waits_for_send() {
  let queue = MessageQueue::new();
  let receiver = queue.clone();
  let (sender, done) = mpsc::channel();

  thread::spawn(move || {
    let value: u32 = receiver.receive();
    let _ = sender.send(value);
  });

  assert!(done.recv_timeout(Duration::from_millis(100)).is_err());

  queue.send(42);
  assert_eq!(done.recv_timeout(Duration::from_secs(1)), Ok(42));
}

#[test]
fn dropping_light_stops_cycle() {
  let light = fast_light(5, 5);
  light.simulate();
  light.wait_for_green();

  let start = Instant::now();
  drop(light);

  assert!(start.elapsed() < Duration::from_secs(1));
}
