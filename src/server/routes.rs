use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/roll") => battle_response(api::roll_payload(body)),
        ("POST", "/api/blitz") => battle_response(api::blitz_payload(body)),
        ("POST", "/api/odds") => battle_response(api::odds_payload(body)),
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn battle_response(result: Result<String, api::BattlePayloadError>) -> HttpResponse {
    match result {
        Ok(payload) => json_ok(payload),
        Err(api::BattlePayloadError::Parse(err)) => {
            error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
        }
        Err(api::BattlePayloadError::Validation(validation)) => {
            validation_error_response(400, "Bad Request", validation)
        }
    }
}

fn json_ok(body: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body,
    }
}

fn validation_error_response(
    status_code: u16,
    status_text: &'static str,
    payload: api::ValidationErrorResponse,
) -> HttpResponse {
    let fallback =
        "{\n  \"status\": \"error\",\n  \"message\": \"Validation failed\"\n}".to_string();

    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: serde_json::to_string_pretty(&payload).unwrap_or(fallback),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Skirmish Roller</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 640px; margin: 24px auto; padding: 0 12px; }
    h1, h2 { text-align: center; }
    h3 { margin: 0 0 6px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
    .right { text-align: right; }
    input { width: 100%; padding: 8px; box-sizing: border-box; }
    .right input { text-align: right; }
    button { padding: 8px 14px; width: 100%; }
    .panel { transition: transform 0.3s; }
    .panel.pop { transform: scale(1.05); }
    .hidden { display: none; }
    .win { color: #2a8a2a; }
    .lose { color: #c0392b; }
    .round { border-top: 1px solid #eee; padding-top: 8px; margin-top: 8px; }
    .round:first-child { border-top: none; padding-top: 0; margin-top: 0; }
    .reset-row { text-align: center; padding-bottom: 24px; }
    .reset-row button { width: auto; background: none; border: none; color: #666; cursor: pointer; }
    summary { cursor: pointer; font-weight: 600; }
  </style>
</head>
<body>
  <h1>Skirmish Roller</h1>

  <div class="card">
    <div class="grid">
      <div>
        <h3>Attacker</h3>
        <input id="attackers" type="number" min="0" />
      </div>
      <div class="right">
        <h3>Defender</h3>
        <input id="defenders" type="number" min="0" />
      </div>
    </div>
    <div class="grid" style="margin-top:16px;">
      <button id="roll-btn" disabled>Roll</button>
      <button id="blitz-btn" disabled>Blitz</button>
    </div>
  </div>

  <div id="outcome" class="panel hidden">
    <h2 id="outcome-title">Remaining Forces</h2>
    <div class="card">
      <div id="outcome-body" class="grid"></div>
    </div>
  </div>

  <div id="rounds" class="card hidden">
    <details>
      <summary>View Individual Roll Breakdown</summary>
      <div id="rounds-list"></div>
    </details>
  </div>

  <div id="reset-row" class="reset-row hidden">
    <button id="reset-btn">Reset</button>
  </div>

  <script>
    const attackersEl = document.getElementById('attackers');
    const defendersEl = document.getElementById('defenders');
    const rollBtn = document.getElementById('roll-btn');
    const blitzBtn = document.getElementById('blitz-btn');
    const outcomeEl = document.getElementById('outcome');
    const outcomeTitleEl = document.getElementById('outcome-title');
    const outcomeBodyEl = document.getElementById('outcome-body');
    const roundsEl = document.getElementById('rounds');
    const roundsListEl = document.getElementById('rounds-list');
    const resetRowEl = document.getElementById('reset-row');

    function currentForces() {
      const attackers = attackersEl.value === '' ? null : Number(attackersEl.value);
      const defenders = defendersEl.value === '' ? null : Number(defendersEl.value);
      return { attackers, defenders };
    }

    function canAttack() {
      const forces = currentForces();
      return (forces.attackers ?? 0) > 1 && (forces.defenders ?? 0) > 0;
    }

    function refreshButtons() {
      rollBtn.disabled = !canAttack();
      blitzBtn.disabled = !canAttack();
    }

    attackersEl.addEventListener('input', refreshButtons);
    defendersEl.addEventListener('input', refreshButtons);

    function dieSpans(dice, opposing, holds) {
      return dice.map((value, i) => {
        const paired = opposing[i];
        let cls = '';
        if (paired !== undefined) cls = holds(value, paired) ? 'win' : 'lose';
        const sep = i === 0 ? '' : ', ';
        return sep + '<span class="' + cls + '">' + value + '</span>';
      }).join('');
    }

    function renderRound(round) {
      const attack = dieSpans(round.attack_dice, round.defend_dice, (a, d) => a > d);
      const defend = dieSpans(round.defend_dice, round.attack_dice, (d, a) => a <= d);
      return '<div class="round">'
        + '<div class="grid"><div><h3>Attacker</h3><p>' + attack + '</p></div>'
        + '<div class="right"><h3>Defender</h3><p>' + defend + '</p></div></div>'
        + '<h3>Remaining</h3>'
        + '<div class="grid"><div><p>' + round.remaining.attackers + '</p></div>'
        + '<div class="right"><p>' + round.remaining.defenders + '</p></div></div>'
        + '</div>';
    }

    function render(payload) {
      const remaining = payload.report.remaining;
      attackersEl.value = remaining.attackers;
      defendersEl.value = remaining.defenders;

      if (payload.report.winner) {
        const side = payload.report.winner === 'attacker' ? 'Attacker' : 'Defender';
        const units = payload.report.winner === 'attacker' ? remaining.attackers : remaining.defenders;
        outcomeTitleEl.textContent = 'Winner';
        outcomeBodyEl.innerHTML = '<div><h3>' + side + '</h3></div><div class="right"><p>' + units + '</p></div>';
      } else {
        outcomeTitleEl.textContent = 'Remaining Forces';
        outcomeBodyEl.innerHTML = '<div><h3>Attacker</h3><p>' + remaining.attackers + '</p></div>'
          + '<div class="right"><h3>Defender</h3><p>' + remaining.defenders + '</p></div>';
      }

      roundsListEl.innerHTML = payload.report.rounds.map(renderRound).join('');
      outcomeEl.classList.remove('hidden');
      roundsEl.classList.remove('hidden');
      resetRowEl.classList.remove('hidden');

      outcomeEl.classList.add('pop');
      setTimeout(() => outcomeEl.classList.remove('pop'), 300);

      refreshButtons();
    }

    async function battle(mode) {
      const forces = currentForces();
      if (forces.attackers === null || forces.defenders === null) return;
      const response = await fetch('/api/' + mode, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ attackers: forces.attackers, defenders: forces.defenders }),
      });
      if (!response.ok) { refreshButtons(); return; }
      render(await response.json());
    }

    rollBtn.addEventListener('click', () => battle('roll'));
    blitzBtn.addEventListener('click', () => battle('blitz'));

    document.getElementById('reset-btn').addEventListener('click', () => {
      attackersEl.value = '';
      defendersEl.value = '';
      outcomeEl.classList.add('hidden');
      roundsEl.classList.add('hidden');
      resetRowEl.classList.add('hidden');
      refreshButtons();
    });
  </script>
</body>
</html>
"#
    .to_string()
}
