pub const HTTP_REQUESTS: &str = r#"
# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total{method="GET",status="200"} 1027
http_requests_total{method="POST",status="500"} 3
"#;

pub const MISSING_TYPE: &str = r#"
# HELP queue_depth Depth of the queue
queue_depth{queue="default"} 3
# HELP trailing Declared last
"#;

pub const STRAY_TYPE: &str = r#"
# TYPE ignored_before counter
# HELP cache_hits Cache hits
cache_hits{cache="l1"} 10
# TYPE cache_hits counter
"#;

pub const DANGLING_SAMPLE: &str = r#"
# HELP build_info Build information
# TYPE build_info gauge
build_info{version="1.2.3"} 1
orphan_metric{region="eu"} 1
"#;

pub const INTERLEAVED: &str = r#"
# HELP alpha Alpha
# TYPE alpha counter
alpha{shard="1"} 5
# HELP beta Beta
# TYPE beta gauge
beta{zone="a"} 1
alpha{shard="2"} 7
"#;

pub const REPEATED_DECLARATION: &str = r#"
# HELP sessions Open sessions
# TYPE sessions gauge
sessions{kind="web"} 4
# HELP uptime Uptime
# TYPE uptime counter
uptime 12
# HELP sessions Sessions, declared twice
# TYPE sessions counter
sessions{kind="api"} 2
"#;

pub const TRICKY_LABELS: &str = r#"
# HELP requests Requests with odd labels
# TYPE requests counter
requests{query="a=b&c={d}",msg="say \"hi\"",path="C:\\temp",spaced="x y"} 1 # {trace_id="abc"} 1.0
"#;

pub const UNSORTED: &str = r#"
# HELP zeta_total Last in order
# TYPE zeta_total counter
zeta_total 1
# HELP Alpha_upper Uppercase sorts first
# TYPE Alpha_upper gauge
Alpha_upper 2
# HELP alpha_lower Lowercase after uppercase
# TYPE alpha_lower gauge
alpha_lower{pipe="a|b"} 3
"#;
