//! scenario-gen: canned incident scenario logs for the triage pipeline
//!
//! Usage:
//!   scenario-gen --list             # list scenario titles
//!   scenario-gen <index|name>       # print one scenario log to stdout
//!   scenario-gen <index|name> --json # wrap as {"title": ..., "log": ...}
//!
//! The logs are record-shaped (CSV header + body lines); pipe them into
//! `triage-core --structured` or a live session feed.

use std::env;
use std::process;

struct Scenario {
  title: &'static str,
  log: &'static str,
}

static SCENARIOS: [Scenario; 5] = [
  Scenario {
    title: "API Gateway Surge",
    log: "2024-06-20 00:10:12,api-gateway,ERROR,[gateway-core] Surge in 5xx errors detected across microservices.\nError trace:\n- Service: user-auth | Code: 502 | Msg: Bad Gateway\n- Service: payment-handler | Code: 504 | Msg: Gateway Timeout\nUpstream latency peaked at 912ms.\nLoad balancer reports backend pool depletion.\nCurrent concurrency: 2800 | Threshold: 2500\nRetry logic triggered 3 times with backoff.\nInvestigate backend readiness checks and scaling thresholds.",
  },
  Scenario {
    title: "Auth Token Failures",
    log: "2024-06-20 00:11:45,auth-service,CRITICAL,[auth-core] Multiple authentication token validation failures observed.\nOIDC session state mismatch from client_id=abc123.\nSample trace ID: xyz456789\nRate of failed logins: 180/minute\nJWT signature verification failing due to key mismatch.\nRecent key rotation not propagated to all nodes.\nRecommend refreshing signing key store and auditing token lifecycle policies.",
  },
  Scenario {
    title: "Disk I/O Throttling",
    log: "2024-06-20 00:13:02,disk-monitor,ERROR,[disk-check] Disk I/O throttling detected on volume /dev/sda1.\nAvg write latency: 740ms\nI/O queue depth > 128 for sustained 5 minutes.\nContainer logs show delayed flush operations.\nFilesystem nearing inode exhaustion: 94% used.\nPotential write amplification from misconfigured log rotation.\nInvestigate disk pressure and consider resizing or balancing volumes.",
  },
  Scenario {
    title: "Network Latency",
    log: "2024-06-20 00:14:38,network-agent,WARN,[network-health] Latency thresholds exceeded for external endpoint check.\nPing to https://status.external-api.com took 2112ms (max allowed: 500ms).\nJitter observed across retries (stddev: 483ms).\nCloud NAT gateway logged egress congestion.\nClients experiencing intermittent TLS handshake timeouts.\nRecommendation: verify external routing paths, NAT capacity, and DNS resolution times.",
  },
  Scenario {
    title: "DB Pool Exhaustion",
    log: "2024-06-20 00:15:55,db-service,CRITICAL,[db-core] Connection pool exhausted for PostgreSQL cluster.\nActive sessions: 150 | Max pool size: 120\nRecent slow queries:\n- SELECT * FROM orders WHERE status='pending' => 18.2s\n- UPDATE users SET active=false WHERE last_seen < NOW()-interval '30d' => 25.9s\nQuery planner hint mismatch detected.\nDeadlock logs indicate wait on advisory locks.\nTune long-running queries and expand connection pool size temporarily.",
  },
];

#[derive(serde::Serialize)]
struct ScenarioOut<'a> {
  title: &'a str,
  log: &'a str,
}

fn find(selector: &str) -> Option<&'static Scenario> {
  if let Ok(index) = selector.parse::<usize>() {
    return SCENARIOS.get(index);
  }
  let needle = selector.to_lowercase();
  SCENARIOS
    .iter()
    .find(|s| s.title.to_lowercase().contains(&needle))
}

fn main() {
  let args: Vec<String> = env::args().skip(1).collect();

  if args.iter().any(|a| a == "--list") {
    for (index, scenario) in SCENARIOS.iter().enumerate() {
      println!("{}  {}", index, scenario.title);
    }
    return;
  }

  let as_json = args.iter().any(|a| a == "--json");
  let selector = match args.iter().find(|a| !a.starts_with("--")) {
    Some(s) => s,
    None => {
      eprintln!("usage: scenario-gen --list | scenario-gen <index|name> [--json]");
      process::exit(2);
    }
  };

  let scenario = find(selector).unwrap_or_else(|| {
    eprintln!("scenario-gen: no scenario matches '{}'", selector);
    process::exit(2);
  });

  if as_json {
    let out = ScenarioOut {
      title: scenario.title,
      log: scenario.log,
    };
    println!("{}", serde_json::to_string(&out).expect("scenario serializes"));
  } else {
    println!("{}", scenario.log);
  }
}
