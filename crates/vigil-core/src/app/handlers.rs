impl<CH, RD> WatchfaceApp<CH, RD>
where
    CH: OutboundChannel,
    RD: Renderer,
{
    /// Minute tick from the platform clock service.
    pub fn handle_tick(&mut self, tick: &TickEvent) {
        self.push_time(&tick.clock);

        if tick.units.contains(UnitsChanged::DAY) || self.current_date.is_none() {
            self.current_date = Some(DateReading {
                weekday: tick.clock.weekday,
                day_of_month: tick.clock.day_of_month,
            });
            self.push_date_line();
        }
    }

    /// Shake gesture. Ignored while shake-to-advance is disabled;
    /// otherwise enters manual mode, restarts the expiry, and asks the
    /// companion for the next chunk.
    pub fn handle_shake(&mut self, shake: &ShakeEvent, now_ms: u64) {
        if !self.store.shake_enabled() {
            debug!("nav: shake ignored while disabled");
            return;
        }

        debug!(
            "nav: shake accepted axis={:?} direction={}",
            shake.axis, shake.direction
        );

        self.timer_generation = self.timer_generation.wrapping_add(1);
        let expires_at_ms = now_ms + MANUAL_MODE_TIMEOUT_MS;
        self.nav = NavState::Manual { expires_at_ms };
        self.pending_timer = Some(TimerRequest {
            fire_at_ms: expires_at_ms,
            generation: self.timer_generation,
        });

        // Fire-and-forget: manual mode stands even when the request is lost.
        if self.channel.send(OutboundRequest::NextChunk).is_err() {
            warn!("msg: next-chunk request failed to send");
        }
    }

    /// Expiry of a timer scheduled via [`Self::take_timer_request`]. A
    /// stale generation is a superseded timer and does nothing.
    pub fn handle_timer_expiry(&mut self, generation: u32) {
        if generation != self.timer_generation {
            debug!("nav: stale expiry generation={} ignored", generation);
            return;
        }

        if matches!(self.nav, NavState::Manual { .. }) {
            debug!("nav: manual mode expired");
            self.nav = NavState::Automatic;
        }
    }

    /// Inbound companion message. A malformed message is dropped whole;
    /// recognized fields apply independently otherwise.
    pub fn handle_message(&mut self, entries: &[Entry<'_>]) {
        let update = match protocol::decode(entries) {
            Ok(update) => update,
            Err(err) => {
                warn!("msg: dropped malformed message: {}", err);
                return;
            }
        };

        if update.is_empty() {
            debug!("msg: no recognized keys");
            return;
        }

        self.apply_update(&update);
    }

    fn apply_update(&mut self, update: &RemoteUpdate<'_>) {
        if let Some(temperature) = update.temperature {
            self.store.set_temperature(temperature);
            // The date line embeds the temperature; refresh it now rather
            // than waiting for the next day tick.
            self.push_date_line();
        }

        if let Some(text) = update.scripture_text {
            self.store.set_scripture_text(text);
            self.push_scripture_body();
        }

        if let Some(reference) = update.scripture_reference {
            self.store.set_scripture_reference(reference);
            self.push_scripture_reference();
        }

        if let Some((current, total)) = update.page_pair() {
            self.store.set_scripture_page(current, total);
            self.push_page_indicator();
        }

        if let Some(enabled) = update.shake_enabled {
            self.store.set_shake_enabled(enabled);
            debug!("nav: shake-to-advance enabled={}", enabled);
        }
    }
}
